use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::repository::Repository;

use super::entity::{ProductEntity, price_to_decimal};

const UNIQUE_VIOLATION: &str = "23505";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            RepositoryError::Duplicated
        }
        other => {
            error!(?other, "Product store query failed");
            RepositoryError::DatabaseError
        }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepositoryPostgres {
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO products (id, title, unit_price, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(product.id)
        .bind(product.title.as_str())
        .bind(price_to_decimal(product.unit_price)?)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn select_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, title, unit_price, created_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entity.map(ProductEntity::into_domain).transpose()
    }

    async fn select_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, title, unit_price, created_at FROM products ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(ProductEntity::into_domain).collect()
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET title = $2, unit_price = $3 WHERE id = $1")
            .bind(product.id)
            .bind(product.title.as_str())
            .bind(price_to_decimal(product.unit_price)?)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
