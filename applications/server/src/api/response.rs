//! Success envelopes
//!
//! Every successful response is `{"status":"success", ...}` with either a
//! `data` object or a human readable `message`. Failures are shaped by
//! [`ServerError`](crate::error::ServerError).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// 200 with a `data` object
pub fn ok(data: Value) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "status": "success", "data": data })),
    )
        .into_response()
}

/// 201 with a `data` object and a message
pub fn created(message: &str, data: Value) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({ "status": "success", "message": message, "data": data })),
    )
        .into_response()
}

/// 200 with only a message
pub fn message(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "status": "success", "message": message })),
    )
        .into_response()
}
