use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Per-statement sqlx logging drowns out the request log
const QUIET_TARGETS: &[&str] = &["sqlx::query=warn"];

/// Filter for the configured level. An unparsable level falls back to `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    let mut filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    for target in QUIET_TARGETS {
        if let Ok(directive) = target.parse() {
            filter = filter.add_directive(directive);
        }
    }

    filter
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| build_filter(&config.level));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .init();
        }
    }

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_quiets_sql_statements() {
        let filter = build_filter("debug").to_string();

        assert!(filter.contains("debug"), "{}", filter);
        assert!(filter.contains("sqlx::query=warn"), "{}", filter);
    }

    #[test]
    fn test_unparsable_level_falls_back_to_info() {
        let filter = build_filter("user_crud=loud").to_string();

        assert!(filter.contains("info"), "{}", filter);
        assert!(!filter.contains("loud"), "{}", filter);
    }
}
