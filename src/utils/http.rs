/*---------- Imports ----------*/
use lambda_http::{Body, Error, Response};
use serde_json::Value;

pub struct HttpResponse;

impl HttpResponse {
    pub fn build_json_response(status: u16, payload: Value) -> Result<Response<Body>, Error> {
        Ok(Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST")
            .body(Body::from(payload.to_string()))?)
    }
}
