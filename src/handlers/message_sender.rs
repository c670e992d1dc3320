/*---------- Imports ----------*/
use crate::models::message::SendReceipt;
use crate::utils::{http::HttpResponse, queue::MessageQueue};
use lambda_http::{http::Method, Body, Error, Request, Response};
use serde_json::json;

/// Enqueues the raw POST body as one queue message.
///
/// The body is forwarded byte for byte, so content such as `&` or `=` is
/// never reinterpreted on the way to the queue.
pub async fn handle<Q: MessageQueue>(queue: &Q, request: Request) -> Result<Response<Body>, Error> {
    if *request.method() != Method::POST {
        return HttpResponse::build_json_response(405, json!({"message": "Method not allowed"}));
    }

    let message_body = match read_body(request.body()) {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!(reason = error, "Rejected request");

            return HttpResponse::build_json_response(400, json!({ "message": error }));
        }
    };

    match queue.send_message(message_body).await {
        Ok(message_id) => {
            tracing::info!(message_id = %message_id, "Enqueued message");

            let receipt = serde_json::to_value(SendReceipt { message_id })?;

            HttpResponse::build_json_response(202, receipt)
        }

        Err(error) => {
            tracing::error!(error = %error, "Failed to enqueue message");

            HttpResponse::build_json_response(500, json!({"message": "Failed to enqueue message"}))
        }
    }
}

fn read_body(body: &Body) -> Result<&str, &'static str> {
    let text = match body {
        Body::Text(value) => value.as_str(),
        Body::Binary(bytes) => match std::str::from_utf8(bytes) {
            Ok(value) => value,
            Err(_) => return Err("Request body must be valid UTF-8"),
        },
        Body::Empty => "",
    };

    if text.is_empty() {
        return Err("Request body can't be empty");
    }

    Ok(text)
}
