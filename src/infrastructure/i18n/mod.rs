//! Localization: locale parsing and message bundles

mod locale;
mod messages;

pub use locale::Locale;
pub use messages::{I18nError, MessageSource};
