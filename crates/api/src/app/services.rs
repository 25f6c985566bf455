//! Store wiring for the catalog service.
//!
//! Defaults to the in-memory store (dev/test). With the `postgres` feature
//! and `USE_PERSISTENT_STORES=true`, wires the Postgres adapters instead.

use std::sync::Arc;

use stockroom_catalog::{CatalogService, Category, ListQuery, Product, ProductDraft, ProductPage};
use stockroom_core::ServiceResult;
use stockroom_store::MemoryStore;

#[cfg(feature = "postgres")]
use sqlx::PgPool;
#[cfg(feature = "postgres")]
use stockroom_store::PostgresStore;

type MemoryCatalog = CatalogService<Arc<MemoryStore>, Arc<MemoryStore>>;
#[cfg(feature = "postgres")]
type PostgresCatalog = CatalogService<PostgresStore, PostgresStore>;

/// Type-erased service wiring handed to the route handlers.
#[derive(Clone)]
pub enum AppServices {
    InMemory { catalog: MemoryCatalog },
    #[cfg(feature = "postgres")]
    Persistent { catalog: PostgresCatalog },
}

pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return build_persistent_services().await;
        }
        #[cfg(not(feature = "postgres"))]
        tracing::warn!(
            "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
        );
    }

    build_in_memory_services()
}

fn build_in_memory_services() -> AppServices {
    let store = Arc::new(MemoryStore::new());
    AppServices::InMemory {
        catalog: CatalogService::new(store.clone(), store),
    }
}

#[cfg(feature = "postgres")]
async fn build_persistent_services() -> AppServices {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    let store = PostgresStore::new(pool);
    AppServices::Persistent {
        catalog: CatalogService::new(store.clone(), store),
    }
}

impl AppServices {
    pub async fn create_category(&self, name: Option<String>) -> ServiceResult<Category> {
        match self {
            AppServices::InMemory { catalog } => catalog.create_category(name).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { catalog } => catalog.create_category(name).await,
        }
    }

    pub async fn create_product(&self, draft: ProductDraft) -> ServiceResult<Product> {
        match self {
            AppServices::InMemory { catalog } => catalog.create_product(draft).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { catalog } => catalog.create_product(draft).await,
        }
    }

    pub async fn list_products(&self, query: ListQuery) -> ServiceResult<ProductPage> {
        match self {
            AppServices::InMemory { catalog } => catalog.list_products(query).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { catalog } => catalog.list_products(query).await,
        }
    }

    pub async fn get_product(&self, id: &str) -> ServiceResult<Product> {
        match self {
            AppServices::InMemory { catalog } => catalog.get_product(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { catalog } => catalog.get_product(id).await,
        }
    }

    pub async fn update_product(&self, id: &str, draft: ProductDraft) -> ServiceResult<Product> {
        match self {
            AppServices::InMemory { catalog } => catalog.update_product(id, draft).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { catalog } => catalog.update_product(id, draft).await,
        }
    }

    pub async fn delete_product(&self, id: &str) -> ServiceResult<()> {
        match self {
            AppServices::InMemory { catalog } => catalog.delete_product(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { catalog } => catalog.delete_product(id).await,
        }
    }
}
