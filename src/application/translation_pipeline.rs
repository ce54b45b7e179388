/// 翻訳通知パイプライン
///
/// S3オブジェクト作成イベントを受けて、以下を順次実行する:
/// 1. イベント先頭レコードからバケット名とオブジェクトキーを抽出
/// 2. S3からオブジェクトを取得
/// 3. UTF-8テキストとしてデコード
/// 4. Amazon Translateで翻訳（元言語は自動検出、翻訳先は固定）
/// 5. 翻訳後テキストをSNSトピックに発行
///
/// 分岐・リトライ・補償処理は存在しない。途中で失敗した場合は
/// エラーをそのまま呼び出し元（Lambdaランタイム）に伝播する。
use aws_lambda_events::event::s3::S3Event;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::{
    PublishResult, S3Ops, S3OpsError, SnsOps, SnsOpsError, TranslateOps, TranslateOpsError,
};

/// 元言語コード（サービス側で自動検出）
const SOURCE_LANGUAGE_CODE: &str = "auto";

/// 翻訳先言語コード（固定）
const TARGET_LANGUAGE_CODE: &str = "de";

/// パイプラインのエラー型
#[derive(Debug, Error)]
pub enum PipelineError {
    /// イベントにレコードが1件も含まれていない
    #[error("イベントにS3レコードが含まれていません")]
    EmptyRecords,
    /// レコードにバケット名がない
    #[error("S3レコードにバケット名がありません")]
    MissingBucketName,
    /// レコードにオブジェクトキーがない
    #[error("S3レコードにオブジェクトキーがありません")]
    MissingObjectKey,
    /// オブジェクト本文がUTF-8としてデコードできない
    #[error("オブジェクトをUTF-8としてデコードできません: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// S3取得エラー
    #[error(transparent)]
    S3(#[from] S3OpsError),
    /// 翻訳エラー
    #[error(transparent)]
    Translate(#[from] TranslateOpsError),
    /// SNS発行エラー
    #[error(transparent)]
    Sns(#[from] SnsOpsError),
}

/// パイプラインの応答
///
/// パイプラインが完走した場合のみ生成される。statusCodeは常に200で、
/// bodyにはSNS発行結果が入る。エラー応答のバリアントは存在しない。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: PublishResult,
}

impl PipelineResponse {
    /// 成功応答を作成
    pub fn ok(body: PublishResult) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}

/// S3オブジェクトを翻訳してSNSに通知するパイプライン
pub struct TranslationPipeline<S, T, N>
where
    S: S3Ops,
    T: TranslateOps,
    N: SnsOps,
{
    /// S3操作
    s3_ops: S,
    /// 翻訳操作
    translate_ops: T,
    /// SNS操作
    sns_ops: N,
    /// 発行先SNSトピックARN
    sns_topic_arn: String,
}

impl<S, T, N> TranslationPipeline<S, T, N>
where
    S: S3Ops,
    T: TranslateOps,
    N: SnsOps,
{
    /// 新しいTranslationPipelineを作成
    pub fn new(s3_ops: S, translate_ops: T, sns_ops: N, sns_topic_arn: String) -> Self {
        Self {
            s3_ops,
            translate_ops,
            sns_ops,
            sns_topic_arn,
        }
    }

    /// S3イベントを処理する
    ///
    /// 先頭レコードのみを対象とする。複数レコードのバッチ処理は行わない。
    pub async fn handle(&self, event: &S3Event) -> Result<PipelineResponse, PipelineError> {
        // 先頭レコードからバケット名とオブジェクトキーを抽出
        let record = event.records.first().ok_or(PipelineError::EmptyRecords)?;
        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .ok_or(PipelineError::MissingBucketName)?;
        let key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or(PipelineError::MissingObjectKey)?;

        debug!(bucket = %bucket, key = %key, "イベントレコード抽出完了");

        // オブジェクトを取得してUTF-8テキストとしてデコード
        let bytes = self.s3_ops.get_object(bucket, key).await?;
        let content = String::from_utf8(bytes)?;

        // テキスト全体を1リクエストで翻訳
        let translation = self
            .translate_ops
            .translate_text(&content, SOURCE_LANGUAGE_CODE, TARGET_LANGUAGE_CODE)
            .await?;

        // 翻訳後テキストをそのままSNSに発行
        let publish_result = self
            .sns_ops
            .publish(&self.sns_topic_arn, &translation.translated_text)
            .await?;

        info!(
            bucket = %bucket,
            key = %key,
            detected_source_language = %translation.source_language_code,
            message_id = %publish_result.message_id,
            "翻訳通知パイプライン完了"
        );

        Ok(PipelineResponse::ok(publish_result))
    }
}
