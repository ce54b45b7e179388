//! SNS操作モジュール
//!
//! 翻訳後テキストのSNSトピックへの発行機能を提供する。

use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// SNS操作のエラー型
#[derive(Debug, Error)]
pub enum SnsOpsError {
    /// AWS SDK エラー
    #[error("AWS SNS APIエラー: {0}")]
    AwsSdkError(String),
}

/// SNSメッセージ発行結果
///
/// Lambda応答のbodyにそのままシリアライズされる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishResult {
    /// SNSが採番したメッセージID
    pub message_id: String,
    /// 発行先トピックARN
    pub topic_arn: String,
}

impl PublishResult {
    /// 発行結果を作成
    pub fn new(topic_arn: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            topic_arn: topic_arn.into(),
        }
    }
}

/// SNS操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait SnsOps: Send + Sync {
    /// メッセージをSNSトピックに発行する
    ///
    /// # 引数
    /// * `topic_arn` - SNSトピックARN
    /// * `message` - 発行するメッセージ本文
    ///
    /// # 戻り値
    /// * `Ok(PublishResult)` - 発行結果
    /// * `Err(SnsOpsError)` - エラー
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<PublishResult, SnsOpsError>;
}

/// 実際のAWS SNS SDKを使用したSNS操作実装
pub struct AwsSnsOps {
    client: SnsClient,
}

impl AwsSnsOps {
    /// 新しいAwsSnsOpsを作成
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }

    /// AWS設定からデフォルトのクライアントを作成
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = SnsClient::new(&config);
        Self::new(client)
    }
}

#[async_trait]
impl SnsOps for AwsSnsOps {
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<PublishResult, SnsOpsError> {
        info!(
            topic_arn = %topic_arn,
            message_length = message.len(),
            "SNSメッセージ発行開始"
        );

        let result = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .send()
            .await;

        match result {
            Ok(response) => {
                let message_id = response.message_id().unwrap_or("unknown").to_string();

                info!(
                    topic_arn = %topic_arn,
                    message_id = %message_id,
                    "SNS Publish成功"
                );

                Ok(PublishResult::new(topic_arn, message_id))
            }
            Err(err) => {
                warn!(
                    topic_arn = %topic_arn,
                    error = %err,
                    "SNS Publishエラー"
                );
                Err(SnsOpsError::AwsSdkError(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// テスト用のモックSNS操作
    struct MockSnsOps {
        /// 成功させるトピックARNのリスト
        success_topics: Vec<String>,
        /// publish呼び出し回数
        call_count: Arc<AtomicUsize>,
        /// 発行されたメッセージを記録 (トピックARN, メッセージ)
        published_messages: std::sync::Mutex<Vec<(String, String)>>,
    }

    impl MockSnsOps {
        fn new(success_topics: Vec<String>) -> Self {
            Self {
                success_topics,
                call_count: Arc::new(AtomicUsize::new(0)),
                published_messages: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        fn get_published_messages(&self) -> Vec<(String, String)> {
            self.published_messages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SnsOps for MockSnsOps {
        async fn publish(
            &self,
            topic_arn: &str,
            message: &str,
        ) -> Result<PublishResult, SnsOpsError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            self.published_messages
                .lock()
                .unwrap()
                .push((topic_arn.to_string(), message.to_string()));

            if self.success_topics.contains(&topic_arn.to_string()) {
                Ok(PublishResult::new(
                    topic_arn,
                    format!("mock-message-id-{}", self.call_count()),
                ))
            } else {
                Err(SnsOpsError::AwsSdkError("mock error".to_string()))
            }
        }
    }

    #[test]
    fn test_publish_result_serializes_for_response_body() {
        let result = PublishResult::new(
            "arn:aws:sns:eu-central-1:123456789012:translated-text",
            "msg-123",
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["message_id"], "msg-123");
        assert_eq!(
            json["topic_arn"],
            "arn:aws:sns:eu-central-1:123456789012:translated-text"
        );
    }

    #[test]
    fn test_sns_ops_error_display() {
        let sdk_error = SnsOpsError::AwsSdkError("NotFound".to_string());
        assert_eq!(sdk_error.to_string(), "AWS SNS APIエラー: NotFound");
    }

    #[tokio::test]
    async fn test_mock_sns_ops_publish_success() {
        let mock = MockSnsOps::new(vec![
            "arn:aws:sns:eu-central-1:123456789012:test-topic".to_string(),
        ]);

        let result = mock
            .publish(
                "arn:aws:sns:eu-central-1:123456789012:test-topic",
                "Hallo Welt",
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(mock.call_count(), 1);

        // メッセージが改変されずに記録されたことを確認
        let messages = mock.get_published_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].0,
            "arn:aws:sns:eu-central-1:123456789012:test-topic"
        );
        assert_eq!(messages[0].1, "Hallo Welt");
    }

    #[tokio::test]
    async fn test_mock_sns_ops_publish_failure() {
        let mock = MockSnsOps::new(vec![]);

        let result = mock
            .publish(
                "arn:aws:sns:eu-central-1:123456789012:unknown-topic",
                "Hallo Welt",
            )
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            SnsOpsError::AwsSdkError(_) => {}
        }
        assert_eq!(mock.call_count(), 1);
    }
}
