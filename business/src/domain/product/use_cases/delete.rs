use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::response::ServiceResponse;

pub struct DeleteProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> ServiceResponse<()>;
}
