use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductTitle, UnitPrice};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub title: String,
    pub unit_price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    /// Rows violating the product invariants are reported as persistence errors.
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let title = ProductTitle::new(self.title).map_err(|_| RepositoryError::Persistence)?;
        let unit_price = self
            .unit_price
            .to_f64()
            .ok_or(RepositoryError::Persistence)
            .and_then(|price| UnitPrice::new(price).map_err(|_| RepositoryError::Persistence))?;

        Ok(Product::from_repository(
            self.id,
            title,
            unit_price,
            self.created_at,
        ))
    }
}

/// `from_f64` can carry binary noise below the cent; round back to the column scale.
pub fn price_to_decimal(price: UnitPrice) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price.value())
        .map(|decimal| decimal.round(2))
        .ok_or(RepositoryError::Persistence)
}
