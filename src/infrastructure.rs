// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod s3_ops;
pub mod sns_ops;
pub mod translate_ops;

// Re-exports
pub use config::{NotifierConfig, NotifierConfigError};
pub use logging::init_logging;
pub use s3_ops::{AwsS3Ops, S3Ops, S3OpsError};
pub use sns_ops::{AwsSnsOps, PublishResult, SnsOps, SnsOpsError};
pub use translate_ops::{AwsTranslateOps, TranslateOps, TranslateOpsError, TranslationResult};
