use thiserror::Error;

/// Failures raised below the HTTP layer
///
/// Invalid user input never becomes a `DomainError`; it is reported as
/// field errors by the validation rules instead.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Settings are missing or inconsistent
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The backing store failed or returned unusable data
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
