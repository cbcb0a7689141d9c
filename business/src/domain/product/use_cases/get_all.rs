use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::response::ServiceResponse;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> ServiceResponse<Vec<Product>>;
}
