//! User CRUD web application
//!
//! Server-rendered pages for adding, listing, editing and deleting users,
//! with:
//! - In-memory or PostgreSQL storage behind a repository trait
//! - Field validation with localized messages
//! - Session locale switching through a query parameter

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use api::middleware::LocaleResolver;
use api::state::AppState;
use infrastructure::{
    i18n::MessageSource,
    storage::{StorageConfig, StorageFactory},
    view::ViewRenderer,
};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = StorageConfig::from_settings(&config.storage)?;
    info!(storage_type = ?storage.storage_type(), "Initializing user storage");
    let users = StorageFactory::create_user_repository(&storage).await?;

    let locale_resolver = LocaleResolver::from_settings(&config.i18n)?;
    let messages = MessageSource::embedded(locale_resolver.default_locale().clone())
        .context("Failed to load message bundles")?;
    let views = ViewRenderer::embedded(messages).context("Failed to load view templates")?;

    info!(
        default_locale = %locale_resolver.default_locale(),
        param = locale_resolver.param_name(),
        "Localization ready"
    );

    Ok(AppState::new(users, Arc::new(views), locale_resolver))
}
