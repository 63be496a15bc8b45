//! Migrate command - applies PostgreSQL schema migrations

use anyhow::bail;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{
    run_migrations, PostgresMigrator, StorageConfig, StorageFactory,
};

/// Apply pending migrations to the configured database
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let StorageConfig::Postgres(pg_config) = StorageConfig::from_settings(&config.storage)? else {
        bail!("Migrations require storage.backend = \"postgres\"");
    };

    let pool = StorageFactory::connect(&pg_config).await?;
    let applied = run_migrations(&pool).await?;
    let version = PostgresMigrator::new(pool.clone()).current_version().await?;
    info!(applied, version = ?version, "Migrations complete");

    pool.close().await;

    Ok(())
}
