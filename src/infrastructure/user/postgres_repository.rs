//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::domain::user::{User, UserId};
use crate::domain::{DomainError, Repository};

/// PostgreSQL implementation of the user repository
///
/// Expects the `users` table created by the storage migrations.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create user: {}", e)))?;

        debug!(user_id = id, "Inserted user");

        Ok(user.assign_id(UserId::new(id)))
    }

    async fn upsert(&self, id: UserId, user: User) -> Result<User, DomainError> {
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO users (id, name, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, email = EXCLUDED.email
            RETURNING (xmax = 0)
            "#,
        )
        .bind(id.value())
        .bind(user.name())
        .bind(user.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to save user: {}", e)))?;

        // An explicit id bypasses the serial sequence; move it past the new row.
        if inserted {
            sqlx::query(
                "SELECT setval('users_id_seq', GREATEST($1, (SELECT last_value FROM users_id_seq)))",
            )
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to advance user id sequence: {}", e)))?;
        }

        debug!(user_id = %id, inserted, "Saved user");

        Ok(user)
    }
}

#[async_trait]
impl Repository<User, UserId> for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        match user.id() {
            Some(id) => self.upsert(id, user).await,
            None => self.insert(user).await,
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Invalid user ID in database: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::storage(format!("Invalid user name in database: {}", e)))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| DomainError::storage(format!("Invalid user email in database: {}", e)))?;

    Ok(User::with_id(UserId::new(id), name, email))
}
