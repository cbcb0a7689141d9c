use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductTitle, UnitPrice};
use crate::domain::repository::Repository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl Repository<Product> for ProductRepo {
        async fn insert(&self, entity: &Product) -> Result<(), RepositoryError>;
        async fn select_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
        async fn select_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn update(&self, entity: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, entity: &Product) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(id: Uuid, title: &str, unit_price: f64) -> Product {
    Product::from_repository(
        id,
        ProductTitle::new(title).unwrap(),
        UnitPrice::new(unit_price).unwrap(),
        Utc::now(),
    )
}
