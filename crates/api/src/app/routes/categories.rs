use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/createcategory", post(create_category))
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    match services.create_category(body.name).await {
        Ok(category) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Category created successfully",
                "data": dto::category_to_json(&category),
            })),
        )
            .into_response(),
        Err(err) => errors::service_error_to_response(err, "Error creating category"),
    }
}
