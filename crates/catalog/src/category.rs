//! Category record.

use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, ProductId};

/// A persisted category.
///
/// `products` is a back-reference list maintained by the store when products
/// are created or deleted. It is informational only; product operations never
/// rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub products: Vec<ProductId>,
}
