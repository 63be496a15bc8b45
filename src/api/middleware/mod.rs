//! API middleware components

pub mod error_page;
pub mod locale;
pub mod logging;
pub mod security;

pub use error_page::error_page_middleware;
pub use locale::{locale_middleware, LocaleResolver, LOCALE_COOKIE};
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
