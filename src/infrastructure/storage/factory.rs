//! Storage factory for runtime repository selection

use std::sync::Arc;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::StorageSettings;
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

use super::migrations::run_migrations;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Resolve the storage configuration from application settings.
    ///
    /// The Postgres URL comes from `storage.database_url`, falling back to the
    /// `DATABASE_URL` environment variable.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, DomainError> {
        let storage_type = StorageType::from_str(&settings.backend).ok_or_else(|| {
            DomainError::configuration(format!(
                "Unknown storage backend '{}'",
                settings.backend
            ))
        })?;

        match storage_type {
            StorageType::InMemory => Ok(Self::InMemory),
            StorageType::Postgres => {
                let url = settings
                    .database_url
                    .clone()
                    .or_else(|| std::env::var("DATABASE_URL").ok())
                    .ok_or_else(|| {
                        DomainError::configuration(
                            "storage.database_url or DATABASE_URL is required for postgres storage",
                        )
                    })?;

                Ok(Self::Postgres(
                    PostgresConfig::new(url).with_max_connections(settings.max_connections),
                ))
            }
        }
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Factory for creating repository instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates the user repository described by the configuration.
    ///
    /// For PostgreSQL this connects the pool and applies pending migrations.
    pub async fn create_user_repository(
        config: &StorageConfig,
    ) -> Result<Arc<dyn UserRepository>, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory user storage");
                Ok(Arc::new(InMemoryUserRepository::new()))
            }
            StorageConfig::Postgres(pg_config) => {
                info!("Using PostgreSQL user storage");
                let pool = Self::connect(pg_config).await?;
                let applied = run_migrations(&pool).await?;
                info!(applied, "Storage migrations complete");
                Ok(Arc::new(PostgresUserRepository::new(pool)))
            }
        }
    }

    /// Opens a PostgreSQL connection pool
    pub async fn connect(config: &PostgresConfig) -> Result<PgPool, DomainError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        info!("PostgreSQL connection established");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::User;

    fn settings(backend: &str, url: Option<&str>) -> StorageSettings {
        StorageSettings {
            backend: backend.to_string(),
            database_url: url.map(String::from),
            max_connections: 7,
        }
    }

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("pg"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("unknown"), None);
    }

    #[test]
    fn test_from_settings_memory() {
        let config = StorageConfig::from_settings(&settings("memory", None)).unwrap();
        assert_eq!(config.storage_type(), StorageType::InMemory);
    }

    #[test]
    fn test_from_settings_postgres() {
        let config = StorageConfig::from_settings(&settings(
            "postgres",
            Some("postgres://localhost/users"),
        ))
        .unwrap();

        match config {
            StorageConfig::Postgres(pg) => {
                assert_eq!(pg.url, "postgres://localhost/users");
                assert_eq!(pg.max_connections, 7);
            }
            StorageConfig::InMemory => panic!("Expected Postgres config"),
        }
    }

    #[test]
    fn test_from_settings_unknown_backend() {
        let result = StorageConfig::from_settings(&settings("mongo", None));
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_postgres_url_helper() {
        let config = StorageConfig::postgres_url("postgres://localhost/test");
        assert_eq!(config.storage_type(), StorageType::Postgres);
    }

    #[tokio::test]
    async fn test_create_in_memory_repository() {
        let repo = StorageFactory::create_user_repository(&StorageConfig::in_memory())
            .await
            .unwrap();

        let saved = repo.save(User::new("Ann", "ann@example.com")).await.unwrap();
        assert!(saved.is_persisted());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
