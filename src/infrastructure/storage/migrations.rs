//! Database migrations infrastructure

use sqlx::postgres::PgPool;
use tracing::info;

use crate::domain::DomainError;

/// PostgreSQL migrator recording applied versions in `_migrations`
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                success BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Runs a single migration; returns false if it was already applied
    pub async fn run_migration(&self, migration: &Migration) -> Result<bool, DomainError> {
        self.ensure_migrations_table().await?;

        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)",
        )
        .bind(migration.version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))?;

        if applied {
            return Ok(false);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to start migration: {}", e)))?;

        sqlx::raw_sql(&migration.up)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(&migration.description)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            description = %migration.description,
            "Applied migration"
        );

        Ok(true)
    }

    /// Returns the latest applied migration version
    pub async fn current_version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        let version: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(version) FROM _migrations WHERE success = TRUE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get migration version: {}", e)))?;

        Ok(version)
    }
}

/// Represents a database migration
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: String,
    pub up: String,
}

impl Migration {
    pub fn new(version: i64, description: impl Into<String>, up: impl Into<String>) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
        }
    }
}

/// Migrations for the user tables, in ascending version order
pub fn user_migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "Create users table",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        );
        "#,
    )]
}

/// Runs all pending migrations, returning how many were applied
pub async fn run_migrations(pool: &PgPool) -> Result<usize, DomainError> {
    let migrator = PostgresMigrator::new(pool.clone());
    let mut applied = 0;

    for migration in user_migrations() {
        if migrator.run_migration(&migration).await? {
            applied += 1;
        }
    }

    Ok(applied)
}
