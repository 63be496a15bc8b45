//! Domain traits shared across entities

mod repository;

pub use repository::Repository;
