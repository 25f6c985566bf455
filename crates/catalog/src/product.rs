//! Product record and mutation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, ProductId};

/// A persisted product.
///
/// `category` references exactly one existing category; the service checks
/// that the reference resolves before a product is created. Timestamps are
/// maintained by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: CategoryId,
    pub price: i64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new product. The store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub category: CategoryId,
    pub price: i64,
    pub quantity: i64,
}

/// Quantity-only patch — the update policy admits no other field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityPatch {
    pub quantity: i64,
}
