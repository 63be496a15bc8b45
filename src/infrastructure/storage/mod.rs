//! Storage infrastructure - backend selection and schema migrations

mod factory;
pub mod migrations;

pub use factory::{PostgresConfig, StorageConfig, StorageFactory, StorageType};
pub use migrations::{run_migrations, user_migrations, Migration, PostgresMigrator};
