use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Generic repository trait for CRUD operations
///
/// `save` is an upsert keyed by the entity's identifier: an entity without an
/// identifier is assigned one, an entity with an identifier replaces whatever
/// is stored under it.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync + Debug
where
    T: Send + Sync,
    ID: Send + Sync,
{
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, DomainError>;

    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    async fn save(&self, entity: T) -> Result<T, DomainError>;

    async fn delete(&self, id: &ID) -> Result<bool, DomainError>;
}
