use std::str::FromStr;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.database_url_missing")]
    DatabaseUrlMissing,
    #[error("config.unknown_storage_backend: {0}")]
    UnknownStorageBackend(String),
}

/// Where products are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::UnknownStorageBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Load storage settings from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "postgres" or "memory" (default: "postgres")
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - MIGRATIONS_PATH: sqlx migrations directory
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::Postgres,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::DatabaseUrlMissing);
        }

        Ok(Self {
            backend,
            database_url,
            migrations_path: lookup("MIGRATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Initialize the product store selected by the environment
///
/// # Errors
/// Returns error if the configuration is incomplete, the connection fails,
/// or migrations cannot be applied
pub async fn init_repository() -> anyhow::Result<Arc<dyn ProductRepository>> {
    let settings = DatabaseSettings::from_env()?;

    match (settings.backend, settings.database_url) {
        (StorageBackend::Postgres, Some(url)) => {
            let pool = create_postgres_pool(&DatabaseConfig::new(url)).await?;
            run_migrations(&pool, &settings.migrations_path).await?;
            info!("Using PostgreSQL product store");
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        (StorageBackend::Postgres, None) => Err(ConfigError::DatabaseUrlMissing.into()),
        (StorageBackend::Memory, _) => {
            warn!("Using in-memory product store; data is lost on restart");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
    }
}
