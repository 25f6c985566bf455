//! Store adapters for the catalog service.
//!
//! `MemoryStore` is the default wiring (dev/test); `PostgresStore` is
//! available behind the `postgres` feature for persistent deployments.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;
