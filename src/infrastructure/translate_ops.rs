//! 翻訳操作モジュール
//!
//! Amazon Translateによるテキスト翻訳機能を提供する。
//! テキスト全体を1リクエストで送信する（分割なし）。

use async_trait::async_trait;
use aws_sdk_translate::Client as TranslateClient;
use thiserror::Error;
use tracing::{info, warn};

/// 翻訳操作のエラー型
#[derive(Debug, Error)]
pub enum TranslateOpsError {
    /// AWS SDK エラー（サイズ超過による拒否・サービス利用不可を含む）
    #[error("AWS Translate APIエラー: {0}")]
    AwsSdkError(String),
}

/// 翻訳結果
///
/// `source_language_code`はサービスが検出した元言語。
/// 後続処理では使用しないが、応答の一部としてそのまま保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    /// 翻訳後テキスト
    pub translated_text: String,
    /// 検出された元言語コード
    pub source_language_code: String,
}

/// 翻訳操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait TranslateOps: Send + Sync {
    /// テキストを翻訳する
    ///
    /// # 引数
    /// * `text` - 翻訳対象テキスト
    /// * `source_language_code` - 元言語コード（`"auto"`で自動検出）
    /// * `target_language_code` - 翻訳先言語コード
    ///
    /// # 戻り値
    /// * `Ok(TranslationResult)` - 翻訳結果
    /// * `Err(TranslateOpsError)` - エラー
    async fn translate_text(
        &self,
        text: &str,
        source_language_code: &str,
        target_language_code: &str,
    ) -> Result<TranslationResult, TranslateOpsError>;
}

/// 実際のAWS Translate SDKを使用した翻訳操作実装
pub struct AwsTranslateOps {
    client: TranslateClient,
}

impl AwsTranslateOps {
    /// 新しいAwsTranslateOpsを作成
    pub fn new(client: TranslateClient) -> Self {
        Self { client }
    }

    /// AWS設定からデフォルトのクライアントを作成
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = TranslateClient::new(&config);
        Self::new(client)
    }
}

#[async_trait]
impl TranslateOps for AwsTranslateOps {
    async fn translate_text(
        &self,
        text: &str,
        source_language_code: &str,
        target_language_code: &str,
    ) -> Result<TranslationResult, TranslateOpsError> {
        info!(
            source_language_code = %source_language_code,
            target_language_code = %target_language_code,
            text_length = text.len(),
            "翻訳リクエスト開始"
        );

        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_language_code)
            .target_language_code(target_language_code)
            .send()
            .await
            .map_err(|err| {
                warn!(
                    target_language_code = %target_language_code,
                    error = %err,
                    "Translate APIエラー"
                );
                TranslateOpsError::AwsSdkError(err.to_string())
            })?;

        let result = TranslationResult {
            translated_text: output.translated_text().to_string(),
            source_language_code: output.source_language_code().to_string(),
        };

        info!(
            detected_source_language = %result.source_language_code,
            translated_length = result.translated_text.len(),
            "翻訳完了"
        );

        Ok(result)
    }
}
