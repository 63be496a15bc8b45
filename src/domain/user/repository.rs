//! User repository trait

use super::entity::{User, UserId};
use crate::domain::traits::Repository;

/// Repository for user storage, keyed by [`UserId`]
pub trait UserRepository: Repository<User, UserId> {}

impl<T> UserRepository for T where T: Repository<User, UserId> {}
