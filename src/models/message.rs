/*---------- Imports ----------*/
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/*---------- Constants ----------*/
pub const DEFAULT_MESSAGE: &str = "No Message field in POST body";
const MESSAGE_FIELD: &str = "Message";
const SUCCESS_STATUS: u16 = 200;

/*---------- Structs ----------*/
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerResponse {
    pub status_code: u16,
    pub body: String,
}

impl ConsumerResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: SUCCESS_STATUS,
            body,
        }
    }
}

/// One record's outcome, in the order the queue delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumedMessage {
    pub index: usize,
    pub message_id: Option<String>,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SendReceipt {
    pub message_id: String,
}

/// Reads the `Message` field of a decoded record body.
///
/// Non-string values are rendered as compact JSON text (`null`, `true`,
/// `{"a":1}`), not as a dynamic language's repr such as `None` or `True`.
/// A missing field yields [`DEFAULT_MESSAGE`].
pub fn extract_message(body: &Map<String, Value>) -> String {
    match body.get(MESSAGE_FIELD) {
        Some(Value::String(value)) => value.to_owned(),
        Some(other) => other.to_string(),
        None => DEFAULT_MESSAGE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_extract_message_string() {
        let body = as_map(json!({ "Message": "hello" }));

        assert_eq!(extract_message(&body), "hello");
    }

    #[test]
    fn test_extract_message_missing_uses_default() {
        let body = as_map(json!({ "message": "wrong case" }));

        assert_eq!(extract_message(&body), DEFAULT_MESSAGE);
    }

    #[test]
    fn test_extract_message_non_string_renders_json() {
        assert_eq!(extract_message(&as_map(json!({ "Message": 42 }))), "42");
        assert_eq!(extract_message(&as_map(json!({ "Message": null }))), "null");
        assert_eq!(
            extract_message(&as_map(json!({ "Message": { "a": 1 } }))),
            r#"{"a":1}"#
        );
    }

    #[test]
    fn test_consumer_response_shape() {
        let response = ConsumerResponse::ok("{}".to_owned());
        let serialized = serde_json::to_value(&response).unwrap();

        assert_eq!(serialized, json!({ "statusCode": 200, "body": "{}" }));
    }
}
