//! Postgres-backed store adapters.
//!
//! Uses runtime queries over an injected connection pool. The schema lives
//! in `schema.sql` next to this crate; `categories.name` carries a UNIQUE
//! constraint as a backstop behind the service's advisory duplicate check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use stockroom_catalog::{
    Category, CategoryStore, NewProduct, Product, ProductFilter, ProductStore, QuantityPatch,
    StoreError, StoreResult,
};
use stockroom_core::{CategoryId, ProductId};

/// Postgres store backing both adapter ports.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::new(err.to_string())
}

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: ProductId::from_uuid(row.try_get::<Uuid, _>("id")?),
        name: row.try_get("name")?,
        category: CategoryId::from_uuid(row.try_get::<Uuid, _>("category_id")?),
        price: row.try_get("price")?,
        quantity: row.try_get("quantity")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    if let Some(category) = filter.category {
        qb.push(" AND category_id = ");
        qb.push_bind(*category.as_uuid());
    }
    if let Some(name) = filter.name.clone() {
        // Exact match, matching the service's listing semantics.
        qb.push(" AND name = ");
        qb.push_bind(name);
    }
}

#[async_trait]
impl CategoryStore for PostgresStore {
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let row = sqlx::query("SELECT id, name FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let id: Uuid = row.try_get("id").map_err(backend)?;
        let name: String = row.try_get("name").map_err(backend)?;

        // Informational back-reference list, derived rather than stored.
        let product_ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM products WHERE category_id = $1 ORDER BY id")
                .bind(id)
                .fetch_all(&self.pool)
                .await
                .map_err(backend)?;

        Ok(Some(Category {
            id: CategoryId::from_uuid(id),
            name,
            products: product_ids.into_iter().map(ProductId::from_uuid).collect(),
        }))
    }

    async fn create(&self, name: &str) -> StoreResult<Category> {
        let id = CategoryId::new();
        sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2)")
            .bind(*id.as_uuid())
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        Ok(Category {
            id,
            name: name.to_string(),
            products: Vec::new(),
        })
    }
}

#[async_trait]
impl ProductStore for PostgresStore {
    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let row = sqlx::query(
            "SELECT id, name, category_id, price, quantity, created_at, updated_at \
             FROM products WHERE id = $1",
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(|r| product_from_row(&r)).transpose().map_err(backend)
    }

    async fn find_many(
        &self,
        filter: &ProductFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Product>> {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, category_id, price, quantity, created_at, updated_at \
             FROM products WHERE TRUE",
        );
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY id LIMIT ");
        qb.push_bind(limit);
        qb.push(" OFFSET ");
        qb.push_bind(offset);

        let rows = qb.build().fetch_all(&self.pool).await.map_err(backend)?;
        rows.iter()
            .map(product_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(backend)
    }

    async fn count(&self, filter: &ProductFilter) -> StoreResult<i64> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM products WHERE TRUE");
        push_filter(&mut qb, filter);

        let row = qb.build().fetch_one(&self.pool).await.map_err(backend)?;
        row.try_get::<i64, _>(0).map_err(backend)
    }

    async fn create(&self, fields: NewProduct) -> StoreResult<Product> {
        let id = ProductId::new();
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO products (id, name, category_id, price, quantity, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $6)",
        )
        .bind(*id.as_uuid())
        .bind(&fields.name)
        .bind(*fields.category.as_uuid())
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(Product {
            id,
            name: fields.name,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_by_id(
        &self,
        id: ProductId,
        patch: QuantityPatch,
    ) -> StoreResult<Option<Product>> {
        let row = sqlx::query(
            "UPDATE products SET quantity = $2, updated_at = NOW() WHERE id = $1 \
             RETURNING id, name, category_id, price, quantity, created_at, updated_at",
        )
        .bind(*id.as_uuid())
        .bind(patch.quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(|r| product_from_row(&r)).transpose().map_err(backend)
    }

    async fn delete_by_id(&self, id: ProductId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected() > 0)
    }
}
