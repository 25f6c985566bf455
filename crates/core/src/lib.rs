//! `stockroom-core` — shared building blocks for the catalog service.
//!
//! This crate contains **pure** primitives (error taxonomy, strongly-typed
//! identifiers) with no HTTP or storage concerns.

pub mod error;
pub mod id;

pub use error::{ServiceError, ServiceResult};
pub use id::{CategoryId, ProductId};
