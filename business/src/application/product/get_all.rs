use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::repository::Repository;
use crate::domain::response::ServiceResponse;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> ServiceResponse<Vec<Product>> {
        self.logger.info("Fetching all products");

        match self.repository.select_all().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Found {} products", products.len()));
                ServiceResponse::success(products)
            }
            Err(err) => {
                let err = ProductError::from(err);
                self.logger.error(&format!("Failed to list products: {}", err));
                ServiceResponse::failure(err.to_string())
            }
        }
    }
}
