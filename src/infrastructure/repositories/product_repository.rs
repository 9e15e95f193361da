//! Product Repository Implementation
//!
//! PostgreSQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Product, ProductRepository, Validatable};
use crate::shared::error::AppError;

/// Database row representation matching the products table schema.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price: f64,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, AppError> {
        let id = self.id.clone();
        Product::new(self.id, self.name, self.price).map_err(|e| {
            tracing::error!(product_id = %id, error = %e, "Stored product failed validation");
            AppError::Internal(format!("Stored product {id} is invalid: {e}"))
        })
    }
}

/// PostgreSQL product repository implementation.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &Product) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(product.id())
        .bind(product.name())
        .bind(product.price())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Product with this id already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(product.id())
        .bind(product.name())
        .bind(product.price())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price FROM products ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }
}
