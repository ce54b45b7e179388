// アプリケーション層モジュール
pub mod translation_pipeline;

// 再エクスポート
pub use translation_pipeline::{PipelineError, PipelineResponse, TranslationPipeline};
