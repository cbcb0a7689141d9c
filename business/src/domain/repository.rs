use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryError;

/// Anything the persistence gateway can store: it only needs a stable identity.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Generic CRUD gateway over an entity type.
///
/// Absence is not an error for `select_by_id`; `update` and `delete` report
/// `RepositoryError::NotFound` when no record matches the entity id.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn insert(&self, entity: &T) -> Result<(), RepositoryError>;
    async fn select_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError>;
    async fn select_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;
    async fn delete(&self, entity: &T) -> Result<(), RepositoryError>;
}
