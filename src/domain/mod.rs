//! Domain layer - entities, validation rules and repository traits

pub mod error;
pub mod traits;
pub mod user;

pub use error::DomainError;
pub use traits::Repository;
pub use user::{User, UserId, UserRepository};
