use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::{ProductTitle, UnitPrice};
use crate::domain::repository::Repository;
use crate::domain::response::ServiceResponse;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    async fn update(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        if params.id.is_nil() {
            return Err(ProductError::IdRequired);
        }
        let title = ProductTitle::new(params.title)?;
        let unit_price = UnitPrice::new(params.unit_price)?;

        let existing = self
            .repository
            .select_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        let updated = existing.with_details(title, unit_price);

        // The row can vanish between the lookup and the write.
        self.repository
            .update(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> ServiceResponse<()> {
        let id = params.id;
        self.logger.info(&format!("Updating product: {}", id));

        match self.update(params).await {
            Ok(()) => {
                self.logger.info(&format!("Product updated: {}", id));
                ServiceResponse::success(())
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Product {} not updated: {}", id, err));
                ServiceResponse::failure(err.to_string())
            }
        }
    }
}
