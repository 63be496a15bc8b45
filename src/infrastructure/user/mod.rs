//! User infrastructure module
//!
//! Repository implementations backing the user domain: an in-memory store for
//! development and tests, and a PostgreSQL store.

mod in_memory;
mod postgres_repository;

pub use in_memory::InMemoryUserRepository;
pub use postgres_repository::PostgresUserRepository;
