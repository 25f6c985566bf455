use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};

use stockroom_core::ServiceError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/createproduct", post(create_product))
        .route("/getproducts", get(list_products))
        .route("/getproduct/:id", get(get_product))
        .route("/updateproduct/:id", put(update_product))
        .route("/deleteproduct/:id", delete(delete_product))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductPayload>,
) -> axum::response::Response {
    match services.create_product(body.into()).await {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Product created successfully",
                "data": dto::product_to_json(&product),
            })),
        )
            .into_response(),
        // The previous service reported an unresolvable category as a plain
        // client error, not as 404; callers depend on the status.
        Err(ServiceError::NotFound(msg)) => errors::failure(StatusCode::BAD_REQUEST, msg),
        Err(err) => errors::service_error_to_response(err, "Error creating product"),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    match services.list_products(query.into()).await {
        Ok(page) => {
            let (data, meta) = dto::page_to_json(&page);
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "message": "Products fetched successfully",
                    "data": data,
                    "meta": meta,
                })),
            )
                .into_response()
        }
        // Legacy status: an empty page is a client error, like the unknown
        // category filter.
        Err(ServiceError::NotFound(msg)) => errors::failure(StatusCode::BAD_REQUEST, msg),
        Err(err) => errors::service_error_to_response(err, "Error fetching products"),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.get_product(&id).await {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Product fetched successfully",
                "data": dto::product_to_json(&product),
            })),
        )
            .into_response(),
        Err(err) => errors::service_error_to_response(err, "Error fetching product"),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductPayload>,
) -> axum::response::Response {
    match services.update_product(&id, body.into()).await {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Product updated successfully",
                "data": dto::product_to_json(&product),
            })),
        )
            .into_response(),
        Err(err) => errors::service_error_to_response(err, "Error updating product"),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.delete_product(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Product deleted successfully",
            })),
        )
            .into_response(),
        Err(err) => errors::service_error_to_response(err, "Error deleting product"),
    }
}
