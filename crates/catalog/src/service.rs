//! Product query & mutation service.
//!
//! One service invocation per inbound request; the injected stores are the
//! only shared state. Every operation validates first, then performs its
//! store calls, so failure paths never leave partial writes behind.

use serde::Serialize;

use stockroom_core::{ProductId, ServiceError, ServiceResult};

use crate::category::Category;
use crate::product::{NewProduct, Product};
use crate::store::{CategoryStore, ProductFilter, ProductStore, StoreError};
use crate::validate::{
    ProductDraft, validate_category_name, validate_product_create, validate_product_update,
};

/// Page size applied when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Upper bound on the page size, whatever the caller asks for.
pub const MAX_PAGE_SIZE: i64 = 20;

/// Listing parameters as received from a caller, before clamping.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Pagination metadata accompanying a listing page.
///
/// Serializes in the wire shape callers already consume
/// (`totalPages`, not `total_pages`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub limit: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// One page of products plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub meta: PageMeta,
}

/// Orchestrates validation and the injected store adapters to implement the
/// five product operations and the one category operation.
#[derive(Debug, Clone)]
pub struct CatalogService<C, P> {
    categories: C,
    products: P,
}

impl<C, P> CatalogService<C, P>
where
    C: CategoryStore,
    P: ProductStore,
{
    pub fn new(categories: C, products: P) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Create a category, rejecting duplicates by name.
    ///
    /// The duplicate check is advisory (check-then-act); two concurrent
    /// calls with the same name can both pass it. The store may additionally
    /// enforce uniqueness, but the observable contract is the conflict
    /// returned here.
    pub async fn create_category(&self, name: Option<String>) -> ServiceResult<Category> {
        let name = validate_category_name(name)?;

        let existing = self
            .categories
            .find_by_name(&name)
            .await
            .map_err(store_failure)?;
        if existing.is_some() {
            return Err(ServiceError::conflict("Category already exists"));
        }

        self.categories.create(&name).await.map_err(store_failure)
    }

    /// Create a product referencing an existing category by name.
    pub async fn create_product(&self, draft: ProductDraft) -> ServiceResult<Product> {
        let valid = validate_product_create(draft)?;

        let category = self
            .categories
            .find_by_name(&valid.category)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| ServiceError::not_found("Please select a valid category"))?;

        let fields = NewProduct {
            name: valid.name,
            category: category.id,
            price: valid.price,
            quantity: valid.quantity,
        };
        self.products.create(fields).await.map_err(store_failure)
    }

    /// List products with clamped pagination and optional name/category
    /// filters.
    ///
    /// `search` is an exact match on the product name, kept for
    /// compatibility with the previous service despite the parameter's
    /// name. An empty page reports as a not-found failure rather than an
    /// empty list; callers depend on that too.
    pub async fn list_products(&self, query: ListQuery) -> ServiceResult<ProductPage> {
        let limit = effective_limit(query.limit);
        let page = effective_page(query.page);
        // Saturate: page is unbounded above, and a huge page must read as
        // "past the end", not overflow.
        let offset = (page - 1).saturating_mul(limit);

        let mut filter = ProductFilter::default();
        if let Some(name) = query.category.as_deref().filter(|c| !c.is_empty()) {
            let category = self
                .categories
                .find_by_name(name)
                .await
                .map_err(store_failure)?
                .ok_or_else(|| ServiceError::validation("Please select a valid category"))?;
            filter.category = Some(category.id);
        }
        if let Some(search) = query.search.filter(|s| !s.is_empty()) {
            filter.name = Some(search);
        }

        // The page read and the count have no ordering dependency.
        let (data, total) = tokio::try_join!(
            self.products.find_many(&filter, limit, offset),
            self.products.count(&filter),
        )
        .map_err(store_failure)?;

        if data.is_empty() {
            return Err(ServiceError::not_found("Products not found"));
        }

        Ok(ProductPage {
            data,
            meta: PageMeta {
                total,
                limit,
                page,
                total_pages: total_pages(total, limit),
            },
        })
    }

    /// Fetch a single product by its (string-form) id.
    pub async fn get_product(&self, id: &str) -> ServiceResult<Product> {
        let id = parse_product_id(id)?;
        self.products
            .find_by_id(id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| ServiceError::not_found("Product not found"))
    }

    /// Update a product under the quantity-only policy and return the
    /// post-update record.
    pub async fn update_product(&self, id: &str, draft: ProductDraft) -> ServiceResult<Product> {
        let id = parse_product_id(id)?;
        let patch = validate_product_update(draft)?;

        // Existence check precedes the patch so a missing record is reported
        // as not-found, not as a silent no-op.
        let existing = self
            .products
            .find_by_id(id)
            .await
            .map_err(store_failure)?;
        if existing.is_none() {
            return Err(ServiceError::not_found("Product not found"));
        }

        self.products
            .update_by_id(id, patch)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| ServiceError::not_found("Product not found"))
    }

    /// Delete a product. Succeeds once per id; a second call reports
    /// not-found.
    pub async fn delete_product(&self, id: &str) -> ServiceResult<()> {
        let id = parse_product_id(id)?;
        let removed = self
            .products
            .delete_by_id(id)
            .await
            .map_err(store_failure)?;
        if removed {
            Ok(())
        } else {
            Err(ServiceError::not_found("Product not found"))
        }
    }
}

fn parse_product_id(raw: &str) -> ServiceResult<ProductId> {
    if raw.is_empty() {
        return Err(ServiceError::validation("Product id is required"));
    }
    raw.parse()
}

fn store_failure(err: StoreError) -> ServiceError {
    ServiceError::internal(err.to_string())
}

fn effective_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

fn effective_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

fn total_pages(total: i64, limit: i64) -> i64 {
    // Ceiling division; limit is always >= 1 after clamping.
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(effective_limit(None), 10);
        assert_eq!(effective_limit(Some(0)), 1);
        assert_eq!(effective_limit(Some(-7)), 1);
        assert_eq!(effective_limit(Some(20)), 20);
        assert_eq!(effective_limit(Some(500)), 20);
    }

    #[test]
    fn page_defaults_and_floors_at_one() {
        assert_eq!(effective_page(None), 1);
        assert_eq!(effective_page(Some(0)), 1);
        assert_eq!(effective_page(Some(-3)), 1);
        assert_eq!(effective_page(Some(4)), 4);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(41, 20), 3);
    }

    #[test]
    fn offset_saturates_for_extreme_pages() {
        let page = effective_page(Some(i64::MAX));
        let limit = effective_limit(Some(20));
        let offset = (page - 1).saturating_mul(limit);
        assert_eq!(offset, i64::MAX);
    }

    #[test]
    fn empty_id_is_a_validation_error() {
        let err = parse_product_id("").unwrap_err();
        assert_eq!(err, ServiceError::validation("Product id is required"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the effective limit lands in [1, 20] and the
            /// effective page is at least 1, whatever the caller sends.
            #[test]
            fn clamps_hold_for_all_inputs(
                limit in proptest::option::of(any::<i64>()),
                page in proptest::option::of(any::<i64>()),
            ) {
                let limit = effective_limit(limit);
                let page = effective_page(page);
                prop_assert!((1..=MAX_PAGE_SIZE).contains(&limit));
                prop_assert!(page >= 1);
            }

            /// Property: total_pages equals ceil(total / limit).
            #[test]
            fn total_pages_matches_ceiling(
                total in 0i64..1_000_000,
                limit in 1i64..=MAX_PAGE_SIZE,
            ) {
                let pages = total_pages(total, limit);
                prop_assert!(pages * limit >= total);
                prop_assert!((pages - 1) * limit < total || pages == 0);
            }
        }
    }
}
