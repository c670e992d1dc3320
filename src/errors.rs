/*---------- Imports ----------*/
use thiserror::Error;

/*---------- Enums ----------*/
#[derive(Debug, Error)]
pub enum ConsumerError {
    #[error("Event has no Records field")]
    MissingRecords,

    #[error("Event doesn't match the queue event shape: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error("Record {index} has no body")]
    MissingBody { index: usize },

    #[error("Record {index} body is not a string")]
    BodyNotString { index: usize },

    #[error("Record {index} body is not valid JSON: {source}")]
    InvalidBody {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {index} body is not a JSON object")]
    BodyNotObject { index: usize },

    #[error("Couldn't serialize the event: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("SendMessage failed: {0}")]
    Send(String),

    #[error("SendMessage returned no message id")]
    MissingMessageId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} can't be empty")]
    Empty(&'static str),
}
