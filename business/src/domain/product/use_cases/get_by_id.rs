use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::response::ServiceResponse;

pub struct GetProductByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    /// A missing product is a successful response with `None`.
    async fn execute(&self, params: GetProductByIdParams) -> ServiceResponse<Option<Product>>;
}
