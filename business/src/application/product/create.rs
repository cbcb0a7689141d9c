use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::repository::Repository;
use crate::domain::response::ServiceResponse;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCaseImpl {
    async fn create(&self, params: CreateProductParams) -> Result<Uuid, ProductError> {
        let product = Product::new(NewProductProps {
            title: params.title,
            unit_price: params.unit_price,
        })?;

        self.repository.insert(&product).await?;

        Ok(product.id)
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> ServiceResponse<Uuid> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        match self.create(params).await {
            Ok(id) => {
                self.logger.info(&format!("Product created with id: {}", id));
                ServiceResponse::success(id)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Product creation rejected: {}", err));
                ServiceResponse::failure(err.to_string())
            }
        }
    }
}
