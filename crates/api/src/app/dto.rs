//! Request DTOs and JSON mapping helpers.

use serde::Deserialize;
use serde_json::json;

use stockroom_catalog::{Category, ListQuery, Product, ProductDraft, ProductPage};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

/// Product payload for create and update requests. Every field is optional;
/// presence checks belong to the validation layer, not the transport.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl From<ProductPayload> for ProductDraft {
    fn from(body: ProductPayload) -> Self {
        ProductDraft {
            name: body.name,
            category: body.category,
            price: body.price,
            quantity: body.quantity,
        }
    }
}

/// Listing query string. `limit` and `page` arrive as raw strings and parse
/// leniently: anything non-numeric falls back to the service defaults, the
/// way the previous service treated them.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl From<ListProductsQuery> for ListQuery {
    fn from(query: ListProductsQuery) -> Self {
        ListQuery {
            limit: parse_lenient(query.limit),
            page: parse_lenient(query.page),
            search: query.search,
            category: query.category,
        }
    }
}

fn parse_lenient(raw: Option<String>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn category_to_json(category: &Category) -> serde_json::Value {
    json!({
        "id": category.id.to_string(),
        "name": category.name,
        "products": category
            .products
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>(),
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id.to_string(),
        "name": product.name,
        "category": product.category.to_string(),
        "price": product.price,
        "quantity": product.quantity,
        "createdAt": product.created_at,
        "updatedAt": product.updated_at,
    })
}

pub fn page_to_json(page: &ProductPage) -> (serde_json::Value, serde_json::Value) {
    let data = page
        .data
        .iter()
        .map(product_to_json)
        .collect::<Vec<_>>()
        .into();
    let meta = json!(page.meta);
    (data, meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_and_page_parse_leniently() {
        assert_eq!(parse_lenient(Some("15".to_string())), Some(15));
        assert_eq!(parse_lenient(Some(" 3 ".to_string())), Some(3));
        assert_eq!(parse_lenient(Some("abc".to_string())), None);
        assert_eq!(parse_lenient(Some(String::new())), None);
        assert_eq!(parse_lenient(None), None);
    }
}
