//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, I18nSettings, LogFormat, LoggingConfig, ServerConfig, StorageSettings,
};
