use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Response envelope shared by every endpoint, successful or not.
/// Field order is part of the public contract.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

pub fn success<T: Serialize>(data: T, message: &str, code: StatusCode) -> Response {
    let body = Envelope {
        status: true,
        message: message.to_string(),
        data: Some(data),
    };
    (code, Json(body)).into_response()
}

pub fn error(message: &str, code: StatusCode) -> Response {
    let body = Envelope::<serde_json::Value> {
        status: false,
        message: message.to_string(),
        data: None,
    };
    (code, Json(body)).into_response()
}
