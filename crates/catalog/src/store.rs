//! Store adapter ports.
//!
//! Implementations live in adapter crates (see `stockroom-store`). The
//! service treats any adapter failure as an internal error; deterministic
//! business failures (duplicates, missing references) are detected by the
//! service itself via explicit lookups, never by the adapter.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::{CategoryId, ProductId};

use crate::category::Category;
use crate::product::{NewProduct, Product, QuantityPatch};

/// Failure inside a store adapter (connectivity, corrupt rows, ...).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Filter applied to product reads.
///
/// `name` is an exact match, not a substring search; the listing operation
/// documents why.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<CategoryId>,
    pub name: Option<String>,
}

/// Lookup and insert operations against category records.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Exact-match lookup by name.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>>;

    /// Insert a category. Duplicate checking is the caller's job.
    async fn create(&self, name: &str) -> StoreResult<Category>;
}

/// Read and write operations against product records.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;

    /// Filtered, paginated read. Independent of [`ProductStore::count`]; the
    /// two may run concurrently and must agree on the filter.
    async fn find_many(
        &self,
        filter: &ProductFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Product>>;

    async fn count(&self, filter: &ProductFilter) -> StoreResult<i64>;

    async fn create(&self, fields: NewProduct) -> StoreResult<Product>;

    /// Apply the patch and return the post-update record, or `None` if the
    /// id does not exist.
    async fn update_by_id(
        &self,
        id: ProductId,
        patch: QuantityPatch,
    ) -> StoreResult<Option<Product>>;

    /// Returns whether a record existed and was removed.
    async fn delete_by_id(&self, id: ProductId) -> StoreResult<bool>;
}

#[async_trait]
impl<S> CategoryStore for Arc<S>
where
    S: CategoryStore + ?Sized,
{
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        (**self).find_by_name(name).await
    }

    async fn create(&self, name: &str) -> StoreResult<Category> {
        (**self).create(name).await
    }
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        (**self).find_by_id(id).await
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Product>> {
        (**self).find_many(filter, limit, offset).await
    }

    async fn count(&self, filter: &ProductFilter) -> StoreResult<i64> {
        (**self).count(filter).await
    }

    async fn create(&self, fields: NewProduct) -> StoreResult<Product> {
        (**self).create(fields).await
    }

    async fn update_by_id(
        &self,
        id: ProductId,
        patch: QuantityPatch,
    ) -> StoreResult<Option<Product>> {
        (**self).update_by_id(id, patch).await
    }

    async fn delete_by_id(&self, id: ProductId) -> StoreResult<bool> {
        (**self).delete_by_id(id).await
    }
}
