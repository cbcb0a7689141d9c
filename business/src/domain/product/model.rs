use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{ProductTitle, UnitPrice};
use crate::domain::repository::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub title: ProductTitle,
    pub unit_price: UnitPrice,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub title: String,
    pub unit_price: f64,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let title = ProductTitle::new(props.title)?;
        let unit_price = UnitPrice::new(props.unit_price)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            unit_price,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository.
    pub fn from_repository(
        id: Uuid,
        title: ProductTitle,
        unit_price: UnitPrice,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            unit_price,
            created_at,
        }
    }

    /// Returns a copy with new title and price; identity and creation time are kept.
    pub fn with_details(&self, title: ProductTitle, unit_price: UnitPrice) -> Self {
        Self {
            id: self.id,
            title,
            unit_price,
            created_at: self.created_at,
        }
    }
}

impl Entity for Product {
    fn id(&self) -> Uuid {
        self.id
    }
}
