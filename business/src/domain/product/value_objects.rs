use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// A non-blank product title, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductTitle(String);

impl ProductTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, ProductError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ProductError::TitleEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductTitle {
    type Error = ProductError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductTitle> for String {
    fn from(title: ProductTitle) -> Self {
        title.0
    }
}

/// Prices are stored as `NUMERIC(18,2)`; anything at or above this does not fit.
pub const MAX_UNIT_PRICE: f64 = 1e16;

/// A strictly positive unit price expressed in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn new(value: f64) -> Result<Self, ProductError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ProductError::InvalidUnitPrice);
        }
        if value >= MAX_UNIT_PRICE {
            return Err(ProductError::UnitPriceTooLarge);
        }
        // Division is correctly rounded, so a two-decimal value survives this exactly.
        if (value * 100.0).round() / 100.0 != value {
            return Err(ProductError::UnitPricePrecision);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for UnitPrice {
    type Error = ProductError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitPrice> for f64 {
    fn from(price: UnitPrice) -> Self {
        price.0
    }
}
