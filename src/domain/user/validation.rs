//! User validation utilities

use thiserror::Error;
use validator::ValidateEmail;

use super::entity::User;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Name cannot be empty")]
    BlankName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Email cannot be empty")]
    BlankEmail,

    #[error("Email is not a well-formed email address")]
    InvalidEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("User ID '{0}' is not a valid number")]
    InvalidId(String),
}

impl UserValidationError {
    /// Message bundle key used to render this error
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::BlankName => "validation.name.blank",
            Self::NameTooLong(_) => "validation.name.size",
            Self::BlankEmail => "validation.email.blank",
            Self::InvalidEmail => "validation.email.format",
            Self::EmailTooLong(_) => "validation.email.size",
            Self::InvalidId(_) => "validation.id.type",
        }
    }

    /// Positional arguments substituted into the bundle message
    pub fn message_args(&self) -> Vec<String> {
        match self {
            Self::NameTooLong(max) | Self::EmailTooLong(max) => vec![max.to_string()],
            Self::InvalidId(value) => vec![value.clone()],
            _ => Vec::new(),
        }
    }
}

/// A validation error bound to the form field that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: UserValidationError,
}

impl FieldError {
    pub fn new(field: &'static str, error: UserValidationError) -> Self {
        Self { field, error }
    }
}

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Validate a user name
///
/// Rules:
/// - Cannot be blank
/// - Maximum 50 characters
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::BlankName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Cannot be blank
/// - Maximum 100 characters
/// - Must be a well-formed address
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::BlankEmail);
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !email.to_owned().validate_email() {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Run every field constraint against a user.
///
/// Returns one entry per failing field; an empty list means the user may be
/// persisted.
pub fn validate_user(user: &User) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_name(user.name()) {
        errors.push(FieldError::new("name", e));
    }

    if let Err(e) = validate_email(user.email()) {
        errors.push(FieldError::new("email", e));
    }

    errors
}
