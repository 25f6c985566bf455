use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Liveness message at the root, in the legacy envelope.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "Your server is on",
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
