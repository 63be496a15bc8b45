//! User domain
//!
//! This module provides the user entity, its field validation rules and the
//! repository trait the web layer depends on.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_name, validate_user, FieldError, UserValidationError,
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
