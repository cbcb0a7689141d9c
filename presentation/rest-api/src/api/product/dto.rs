use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductTitle, UnitPrice};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PostProductRequest {
    /// Product title (cannot be empty)
    pub title: String,
    /// Unit price (must be greater than zero)
    pub unit_price: f64,
}

impl PostProductRequest {
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_details(&self.title, self.unit_price)
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PutProductRequest {
    /// Id of the product to update
    pub id: Option<String>,
    /// Product title (cannot be empty)
    pub title: String,
    /// Unit price (must be greater than zero)
    pub unit_price: f64,
}

impl PutProductRequest {
    pub fn validate(&self) -> Result<Uuid, ProductError> {
        let id = parse_required_id(self.id.as_deref())?;
        validate_details(&self.title, self.unit_price)?;
        Ok(id)
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product title
    pub title: String,
    /// Unit price
    pub unit_price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.into(),
            unit_price: product.unit_price.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreatedProductResponse {
    /// Id assigned to the new product
    pub id: String,
}

/// Parses an id that must be present, well formed and not the nil sentinel.
pub fn parse_required_id(raw: Option<&str>) -> Result<Uuid, ProductError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ProductError::IdRequired);
    }

    let id = Uuid::parse_str(raw).map_err(|_| ProductError::InvalidId)?;
    if id.is_nil() {
        return Err(ProductError::IdRequired);
    }
    Ok(id)
}

fn validate_details(title: &str, unit_price: f64) -> Result<(), ProductError> {
    ProductTitle::new(title)?;
    UnitPrice::new(unit_price)?;
    Ok(())
}
