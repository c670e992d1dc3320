/*---------- Imports ----------*/
use crate::errors::QueueError;

/// Destination for request bodies accepted by the sender endpoint.
#[allow(async_fn_in_trait)]
pub trait MessageQueue {
    /// Enqueues `body` verbatim and returns the queue-assigned message id.
    async fn send_message(&self, body: &str) -> Result<String, QueueError>;
}

pub struct SqsQueue {
    client: aws_sdk_sqs::Client,
    queue_url: String,
}

impl SqsQueue {
    pub fn new(client: aws_sdk_sqs::Client, queue_url: String) -> Self {
        Self { client, queue_url }
    }
}

impl MessageQueue for SqsQueue {
    async fn send_message(&self, body: &str) -> Result<String, QueueError> {
        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|error| QueueError::Send(error.into_service_error().to_string()))?;

        match output.message_id() {
            Some(id) => Ok(id.to_owned()),
            None => Err(QueueError::MissingMessageId),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sqs::operation::send_message::{SendMessageError, SendMessageOutput};
    use aws_sdk_sqs::types::error::QueueDoesNotExist;
    use aws_smithy_mocks::{mock, mock_client};

    const QUEUE_URL: &str = "https://sqs.us-east-2.amazonaws.com/123456789012/test-message-queue";

    #[tokio::test]
    async fn test_send_message_returns_message_id() {
        let send_rule = mock!(aws_sdk_sqs::Client::send_message)
            .match_requests(|request| {
                request.queue_url() == Some(QUEUE_URL)
                    && request.message_body() == Some(r#"{"Message": "a & b"}"#)
            })
            .then_output(|| {
                SendMessageOutput::builder()
                    .message_id("059f36b4-87a3-44ab-83d2-661975830a7d")
                    .build()
            });
        let client = mock_client!(aws_sdk_sqs, [&send_rule]);
        let queue = SqsQueue::new(client, QUEUE_URL.to_owned());

        let message_id = queue.send_message(r#"{"Message": "a & b"}"#).await.unwrap();

        assert_eq!(message_id, "059f36b4-87a3-44ab-83d2-661975830a7d");
    }

    #[tokio::test]
    async fn test_send_message_without_id_fails() {
        let send_rule = mock!(aws_sdk_sqs::Client::send_message)
            .then_output(|| SendMessageOutput::builder().build());
        let client = mock_client!(aws_sdk_sqs, [&send_rule]);
        let queue = SqsQueue::new(client, QUEUE_URL.to_owned());

        let result = queue.send_message("{}").await;

        assert!(matches!(result, Err(QueueError::MissingMessageId)));
    }

    #[tokio::test]
    async fn test_send_message_service_error_is_mapped() {
        let send_rule = mock!(aws_sdk_sqs::Client::send_message).then_error(|| {
            SendMessageError::QueueDoesNotExist(
                QueueDoesNotExist::builder()
                    .message("The specified queue does not exist")
                    .build(),
            )
        });
        let client = mock_client!(aws_sdk_sqs, [&send_rule]);
        let queue = SqsQueue::new(client, QUEUE_URL.to_owned());

        let result = queue.send_message("{}").await;

        assert!(matches!(result, Err(QueueError::Send(_))));
    }
}
