//! S3操作モジュール
//!
//! 翻訳対象オブジェクトのS3からの取得機能を提供する。
//! - バケット名とオブジェクトキーによる単一オブジェクトの読み込み

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use thiserror::Error;
use tracing::{info, warn};

/// S3操作のエラー型
#[derive(Debug, Error)]
pub enum S3OpsError {
    /// AWS SDK エラー（オブジェクト不在・アクセス拒否を含む）
    #[error("AWS S3 APIエラー: {0}")]
    AwsSdkError(String),
    /// レスポンスボディ読み取りエラー
    #[error("オブジェクト本文の読み取りに失敗しました: {0}")]
    BodyReadError(String),
}

/// S3操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait S3Ops: Send + Sync {
    /// オブジェクトをS3から取得してバイト列として返す
    ///
    /// # 引数
    /// * `bucket` - バケット名
    /// * `key` - オブジェクトキー
    ///
    /// # 戻り値
    /// * `Ok(Vec<u8>)` - オブジェクト本文
    /// * `Err(S3OpsError)` - エラー
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, S3OpsError>;
}

/// 実際のAWS S3 SDKを使用したS3操作実装
pub struct AwsS3Ops {
    client: S3Client,
}

impl AwsS3Ops {
    /// 新しいAwsS3Opsを作成
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// AWS設定からデフォルトのクライアントを作成
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = S3Client::new(&config);
        Self::new(client)
    }
}

#[async_trait]
impl S3Ops for AwsS3Ops {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, S3OpsError> {
        info!(bucket = %bucket, key = %key, "S3オブジェクト取得開始");

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                warn!(bucket = %bucket, key = %key, error = %err, "S3 GetObjectエラー");
                S3OpsError::AwsSdkError(err.to_string())
            })?;

        // ストリームを集約してバイト列にする
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|err| {
                warn!(bucket = %bucket, key = %key, error = %err, "S3ボディ読み取りエラー");
                S3OpsError::BodyReadError(err.to_string())
            })?
            .into_bytes();

        info!(
            bucket = %bucket,
            key = %key,
            size_bytes = bytes.len(),
            "S3オブジェクト取得完了"
        );

        Ok(bytes.to_vec())
    }
}
