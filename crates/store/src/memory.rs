//! In-memory document store for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use stockroom_catalog::{
    Category, CategoryStore, NewProduct, Product, ProductFilter, ProductStore, QuantityPatch,
    StoreError, StoreResult,
};
use stockroom_core::{CategoryId, ProductId};

/// In-memory store backing both adapter ports.
///
/// Assigns ids and maintains `created_at`/`updated_at` on products, plus the
/// informational `products` back-reference list on categories, like the
/// document database it stands in for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: RwLock<HashMap<CategoryId, Category>>,
    products: RwLock<HashMap<ProductId, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::new("memory store lock poisoned")
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(category) = filter.category {
        if product.category != category {
            return false;
        }
    }
    if let Some(name) = filter.name.as_deref() {
        if product.name != name {
            return false;
        }
    }
    true
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    async fn create(&self, name: &str) -> StoreResult<Category> {
        let category = Category {
            id: CategoryId::new(),
            name: name.to_string(),
            products: Vec::new(),
        };
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories.insert(category.id, category.clone());
        Ok(category)
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.get(&id).cloned())
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Product>> {
        let products = self.products.read().map_err(poisoned)?;
        let mut page: Vec<Product> = products
            .values()
            .filter(|p| matches(p, filter))
            .cloned()
            .collect();
        // Stable listing order: ids are UUIDv7, so this is insertion order.
        page.sort_by_key(|p| p.id);
        Ok(page
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> StoreResult<i64> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.values().filter(|p| matches(p, filter)).count() as i64)
    }

    async fn create(&self, fields: NewProduct) -> StoreResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(),
            name: fields.name,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
            created_at: now,
            updated_at: now,
        };

        let mut products = self.products.write().map_err(poisoned)?;
        products.insert(product.id, product.clone());

        let mut categories = self.categories.write().map_err(poisoned)?;
        if let Some(category) = categories.get_mut(&product.category) {
            category.products.push(product.id);
        }

        Ok(product)
    }

    async fn update_by_id(
        &self,
        id: ProductId,
        patch: QuantityPatch,
    ) -> StoreResult<Option<Product>> {
        let mut products = self.products.write().map_err(poisoned)?;
        Ok(products.get_mut(&id).map(|product| {
            product.quantity = patch.quantity;
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn delete_by_id(&self, id: ProductId) -> StoreResult<bool> {
        let mut products = self.products.write().map_err(poisoned)?;
        let Some(product) = products.remove(&id) else {
            return Ok(false);
        };
        drop(products);

        let mut categories = self.categories.write().map_err(poisoned)?;
        if let Some(category) = categories.get_mut(&product.category) {
            category.products.retain(|p| *p != id);
        }
        Ok(true)
    }
}

// `Arc<MemoryStore>` gets both port impls via the blanket impls in
// `stockroom_catalog::store`.
