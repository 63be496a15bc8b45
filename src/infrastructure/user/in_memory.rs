//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId};
use crate::domain::{DomainError, Repository};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    /// Last identifier handed out; explicit ids push it forward
    sequence: i64,
}

impl Table {
    fn next_id(&mut self) -> Result<UserId, DomainError> {
        self.sequence = self
            .sequence
            .checked_add(1)
            .ok_or_else(|| DomainError::storage("user id sequence exhausted"))?;
        Ok(UserId::new(self.sequence))
    }

    /// Insert or replace a row, assigning an id to transient users
    fn upsert(&mut self, user: User) -> Result<User, DomainError> {
        let id = match user.id() {
            Some(id) => {
                self.sequence = self.sequence.max(id.value());
                id
            }
            None => self.next_id()?,
        };

        let user = user.assign_id(id);
        self.rows.insert(id, user.clone());
        Ok(user)
    }
}

/// In-memory implementation of the user repository
///
/// Users are kept ordered by id so `find_all` is stable across calls.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    ///
    /// Transient users are assigned ids in the order given.
    pub fn with_users(users: Vec<User>) -> Result<Self, DomainError> {
        let mut table = Table::default();

        for user in users {
            table.upsert(user)?;
        }

        Ok(Self {
            table: Arc::new(RwLock::new(table)),
        })
    }
}

#[async_trait]
impl Repository<User, UserId> for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut table = self.table.write().await;
        table.upsert(user)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(id).is_some())
    }
}
