//! User entity and related types

use serde::Serialize;

/// User identifier assigned by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// A user without an `id` is transient; the repository assigns one on the
/// first save and the value never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    name: String,
    email: String,
}

impl User {
    /// Create a new transient user
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Create a user that refers to an already persisted record
    pub fn with_id(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            email: email.into(),
        }
    }

    // Getters

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check if the user has been saved at least once
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    // Mutators

    /// Attach the identifier generated by the repository
    pub(crate) fn assign_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "User(id={}, name={}, email={})", id, self.name, self.email),
            None => write!(f, "User(id=null, name={}, email={})", self.name, self.email),
        }
    }
}
