/*---------- Imports ----------*/
use apigw_test_infra::handlers::message_consumer;
use apigw_test_infra::models::message::ConsumerResponse;
use apigw_test_infra::utils::logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_logging();

    let handler = service_fn(handler_fn);

    lambda_runtime::run(handler).await?;

    Ok(())
}

async fn handler_fn(event: LambdaEvent<Value>) -> Result<ConsumerResponse, Error> {
    let response = message_consumer::handle(&event.payload, &event.context)?;

    Ok(response)
}
