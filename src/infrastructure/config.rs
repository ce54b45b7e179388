/// 通知設定
///
/// 翻訳結果の発行先SNSトピックARNを環境変数から読み込む。
use thiserror::Error;

/// 通知設定のエラー型
#[derive(Debug, Error)]
pub enum NotifierConfigError {
    #[error("環境変数が設定されていません: {0}")]
    MissingEnvVar(String),
}

/// トピックARNを読み込む環境変数名
///
/// デプロイ済みのLambda設定と互換性を保つため小文字のまま。
const SNS_TOPIC_ENV_VAR: &str = "sns_topic";

/// 翻訳結果通知Lambdaの設定
///
/// 以下の環境変数から読み込む:
/// - sns_topic: 翻訳結果の発行先SNSトピックARN
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// 発行先SNSトピックARN
    sns_topic_arn: String,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # エラー
    /// 必要な環境変数が設定されていない場合はエラーを返す
    pub fn from_env() -> Result<Self, NotifierConfigError> {
        let sns_topic_arn = std::env::var(SNS_TOPIC_ENV_VAR)
            .map_err(|_| NotifierConfigError::MissingEnvVar(SNS_TOPIC_ENV_VAR.to_string()))?;

        Ok(Self { sns_topic_arn })
    }

    /// 明示的な値で設定を作成（テスト用）
    pub fn new(sns_topic_arn: String) -> Self {
        Self { sns_topic_arn }
    }

    /// 発行先SNSトピックARNを取得
    pub fn sns_topic_arn(&self) -> &str {
        &self.sns_topic_arn
    }
}
