//! Catalog domain module: products grouped into categories.
//!
//! This crate contains the product query & mutation service and its
//! collaborators (validation, store adapter ports). It owns no IO of its
//! own; storage is injected through the `CategoryStore`/`ProductStore`
//! traits at construction time.

pub mod category;
pub mod product;
pub mod service;
pub mod store;
pub mod validate;

pub use category::Category;
pub use product::{NewProduct, Product, QuantityPatch};
pub use service::{CatalogService, ListQuery, PageMeta, ProductPage};
pub use store::{CategoryStore, ProductFilter, ProductStore, StoreError, StoreResult};
pub use validate::{ProductDraft, ValidProductCreate};
