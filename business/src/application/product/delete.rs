use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::repository::Repository;
use crate::domain::response::ServiceResponse;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductUseCaseImpl {
    async fn delete(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        if params.id.is_nil() {
            return Err(ProductError::IdRequired);
        }

        // Verify product exists before deleting
        let existing = self
            .repository
            .select_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        self.repository
            .delete(&existing)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })
    }
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> ServiceResponse<()> {
        let id = params.id;
        self.logger.info(&format!("Deleting product: {}", id));

        match self.delete(params).await {
            Ok(()) => {
                self.logger.info(&format!("Product deleted: {}", id));
                ServiceResponse::success(())
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Product {} not deleted: {}", id, err));
                ServiceResponse::failure(err.to_string())
            }
        }
    }
}
