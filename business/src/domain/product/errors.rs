/// Product errors carry human-readable messages; they end up verbatim in the
/// `errorMessage` of the service envelope and in HTTP error bodies.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product title is required.")]
    TitleEmpty,
    #[error("Unit price must be greater than zero.")]
    InvalidUnitPrice,
    #[error("Unit price must have at most two decimal places.")]
    UnitPricePrecision,
    #[error("Unit price is too large.")]
    UnitPriceTooLarge,
    #[error("Product ID is required.")]
    IdRequired,
    #[error("Product ID is malformed.")]
    InvalidId,
    #[error("Product not found.")]
    NotFound,
    #[error("Product store failure: {0}")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
