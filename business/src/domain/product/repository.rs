use crate::domain::repository::Repository;

use super::model::Product;

/// The gateway specialised to products.
pub trait ProductRepository: Repository<Product> {}

impl<R> ProductRepository for R where R: Repository<Product> {}
