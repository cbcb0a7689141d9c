use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::repository::Repository;

/// Process-local product store; records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Product> for InMemoryProductRepository {
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::Duplicated);
        }
        products.push(product.clone());
        Ok(())
    }

    async fn select_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn select_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let stored = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.title = product.title.clone();
        stored.unit_price = product.unit_price;
        Ok(())
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        products.remove(index);
        Ok(())
    }
}
