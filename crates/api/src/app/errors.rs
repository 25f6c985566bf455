//! Consistent error responses.
//!
//! Every failure yields `{success: false, message}` with the status mapping
//! the previous service used: validation and conflicts are 400, missing
//! records are 404, store failures are 500 with the underlying message in an
//! `error` field. Two endpoints deviate by design — create-product's unknown
//! category and the empty-listing failure respond 400 despite being
//! not-found conditions — and their handlers map those cases themselves.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::ServiceError;

/// Map a service failure to the legacy response envelope. `context` labels
/// internal failures (e.g. "Error creating product").
pub fn service_error_to_response(
    err: ServiceError,
    context: &'static str,
) -> axum::response::Response {
    match err {
        ServiceError::Validation(msg) => failure(StatusCode::BAD_REQUEST, msg),
        ServiceError::Conflict(msg) => failure(StatusCode::BAD_REQUEST, msg),
        ServiceError::NotFound(msg) => failure(StatusCode::NOT_FOUND, msg),
        ServiceError::Internal(msg) => internal_failure(context, msg),
    }
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn internal_failure(context: &'static str, detail: String) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": context,
            "error": detail,
        })),
    )
        .into_response()
}
