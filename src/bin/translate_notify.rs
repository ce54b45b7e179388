/// 翻訳通知Lambda関数
///
/// S3オブジェクト作成イベントをトリガーとして、オブジェクトのテキストを
/// Amazon Translateで翻訳し、結果をSNSトピックに発行する。
///
/// 処理は取得→翻訳→発行の直列パイプラインのみで、リトライや
/// 部分失敗時の補償処理は持たない。失敗はすべて呼び出し失敗として
/// プラットフォームに伝播する。
use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_translate::Client as TranslateClient;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tokio::sync::OnceCell;
use tracing::{error, info};
use translate_notifier::application::{PipelineResponse, TranslationPipeline};
use translate_notifier::infrastructure::{
    AwsS3Ops, AwsSnsOps, AwsTranslateOps, NotifierConfig, NotifierConfigError, init_logging,
};

/// パイプラインの静的インスタンス
///
/// Lambda warm start時にAWSクライアントと設定を再利用するため、
/// 一度初期化したパイプラインを静的に保持する。
static PIPELINE: OnceCell<TranslationPipeline<AwsS3Ops, AwsTranslateOps, AwsSnsOps>> =
    OnceCell::const_new();

/// パイプラインを取得（初期化されていなければ初期化）
///
/// # 戻り値
/// * `Ok(&'static TranslationPipeline<...>)` - 静的参照へのパイプライン
/// * `Err(NotifierConfigError)` - 設定読み込みエラー
async fn get_pipeline()
-> Result<&'static TranslationPipeline<AwsS3Ops, AwsTranslateOps, AwsSnsOps>, NotifierConfigError>
{
    PIPELINE
        .get_or_try_init(|| async {
            let config = NotifierConfig::from_env()?;

            // 環境からAWS設定を読み込み（認証情報、リージョンなど）
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

            Ok(TranslationPipeline::new(
                AwsS3Ops::new(S3Client::new(&aws_config)),
                AwsTranslateOps::new(TranslateClient::new(&aws_config)),
                AwsSnsOps::new(SnsClient::new(&aws_config)),
                config.sns_topic_arn().to_string(),
            ))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. 受信イベントをinfoレベルでログ出力
/// 2. 設定とAWSクライアントを取得（初回のみ初期化）
/// 3. TranslationPipelineに処理を委譲
/// 4. 成功時は`{statusCode: 200, body: <発行結果>}`を返却、
///    失敗時はエラーを返して呼び出し自体を失敗させる
async fn handler(event: LambdaEvent<S3Event>) -> Result<PipelineResponse, Error> {
    let s3_event = event.payload;

    // 受信イベントをそのままログ出力（運用調査用）
    info!(
        record_count = s3_event.records.len(),
        raw_event = ?s3_event,
        "S3イベント受信"
    );

    // 設定を読み込んでパイプラインを取得
    let pipeline = match get_pipeline().await {
        Ok(pipeline) => pipeline,
        Err(err) => {
            error!(error = %err, "通知設定読み込み失敗");
            return Err(format!("通知設定読み込み失敗: {}", err).into());
        }
    };

    // パイプラインを実行。エラーはハンドラー内で処理せず伝播する
    match pipeline.handle(&s3_event).await {
        Ok(response) => {
            info!(
                message_id = %response.body.message_id,
                "翻訳通知完了"
            );
            Ok(response)
        }
        Err(err) => {
            error!(error = %err, "翻訳通知パイプライン失敗");
            Err(err.into())
        }
    }
}
