/*---------- Imports ----------*/
use apigw_test_infra::handlers::message_sender;
use apigw_test_infra::utils::{config::SenderConfig, logging, queue::SqsQueue};
use aws_config::BehaviorVersion;
use lambda_http::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_logging();

    let sender_config = SenderConfig::from_env()?;
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let queue = SqsQueue::new(aws_sdk_sqs::Client::new(&config), sender_config.queue_url);
    let handler = service_fn(|request| message_sender::handle(&queue, request));

    lambda_http::run(handler).await?;

    Ok(())
}
