use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::response::ServiceResponse;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub title: String,
    pub unit_price: f64,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> ServiceResponse<()>;
}
