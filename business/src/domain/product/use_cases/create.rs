use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::response::ServiceResponse;

pub struct CreateProductParams {
    pub title: String,
    pub unit_price: f64,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    /// Persists a new product and returns its freshly assigned id.
    async fn execute(&self, params: CreateProductParams) -> ServiceResponse<Uuid>;
}
