use axum::Router;

pub mod categories;
pub mod products;
pub mod system;

/// Routes mounted under the legacy path prefixes.
pub fn router() -> Router {
    Router::new()
        .nest("/api/product", products::router())
        .nest("/api/category", categories::router())
}
