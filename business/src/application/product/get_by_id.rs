use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::repository::Repository;
use crate::domain::response::ServiceResponse;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> ServiceResponse<Option<Product>> {
        self.logger.debug(&format!("Fetching product: {}", params.id));

        let result = self
            .repository
            .select_by_id(params.id)
            .await
            .map_err(ProductError::from);

        if let Ok(None) = result {
            self.logger.info(&format!("Product {} not found", params.id));
        }
        if let Err(err) = &result {
            self.logger
                .error(&format!("Failed to fetch product {}: {}", params.id, err));
        }

        result.into()
    }
}
