/*---------- Imports ----------*/
use crate::errors::ConsumerError;
use crate::models::message::{extract_message, ConsumedMessage, ConsumerResponse};
use lambda_runtime::Context;
use serde::Deserialize;
use serde_json::Value;

/*---------- Constants ----------*/
const RECORDS_FIELD: &str = "Records";

/*---------- Structs ----------*/
/// Only the fields the consumer reads; everything else on a record is ignored.
#[derive(Deserialize, Debug)]
struct QueueEventView {
    #[serde(rename = "Records")]
    records: Vec<RecordView>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RecordView {
    #[serde(default)]
    body: Option<Value>,

    #[serde(default)]
    message_id: Option<Value>,
}

impl RecordView {
    fn message_id(&self) -> Option<String> {
        self.message_id
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// Logs every record's message and echoes the untouched event back.
///
/// The first record that fails to decode aborts the whole invocation.
pub fn handle(event: &Value, context: &Context) -> Result<ConsumerResponse, ConsumerError> {
    tracing::info!(event = %event, "Received event");
    tracing::info!(context = ?context, "Invocation context");

    let consumed = consume(event)?;
    tracing::debug!(records = consumed.len(), "Consumed all records");

    let body = serde_json::to_string(event).map_err(ConsumerError::Serialize)?;

    Ok(ConsumerResponse::ok(body))
}

pub fn consume(event: &Value) -> Result<Vec<ConsumedMessage>, ConsumerError> {
    if event.get(RECORDS_FIELD).is_none() {
        return Err(ConsumerError::MissingRecords);
    }

    let queue_event = QueueEventView::deserialize(event).map_err(ConsumerError::InvalidEvent)?;

    queue_event
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| consume_record(index, record))
        .collect()
}

fn consume_record(index: usize, record: &RecordView) -> Result<ConsumedMessage, ConsumerError> {
    let raw_body = match &record.body {
        Some(Value::String(body)) => body,
        Some(_) => return Err(ConsumerError::BodyNotString { index }),
        None => return Err(ConsumerError::MissingBody { index }),
    };

    let body: Value = serde_json::from_str(raw_body)
        .map_err(|source| ConsumerError::InvalidBody { index, source })?;

    let message_id = record.message_id();

    tracing::info!(index, message_id = ?message_id, body = %body, "Parsed record body");

    let fields = match body.as_object() {
        Some(fields) => fields,
        None => return Err(ConsumerError::BodyNotObject { index }),
    };

    let message = extract_message(fields);

    tracing::info!("MESSAGE CONSUMER LAMBDA: message = {}", message);

    Ok(ConsumedMessage {
        index,
        message_id,
        message,
    })
}
