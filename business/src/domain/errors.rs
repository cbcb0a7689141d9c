/// Failures reported by any store behind `Repository<T>`.
///
/// Messages are machine codes; the application layer wraps them in
/// human-readable product errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A stored record no longer satisfies the entity invariants.
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
