//! Handle database requests for users.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::{Result, ServerError};
use crate::user::User;

const USER_COLUMNS: &str = "id, login, password, age, is_deleted, created_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: Pool<Postgres>,
}

impl UserRepository {
    /// Create a new [`UserRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new user and return its generated id.
    ///
    /// `password` must already be a PHC string.
    pub async fn insert(
        &self,
        login: &str,
        password: &str,
        age: i32,
    ) -> Result<Uuid> {
        let id = sqlx::query_scalar(
            r#"INSERT INTO users (login, password, age)
                VALUES ($1, $2, $3)
                RETURNING id"#,
        )
        .bind(login)
        .bind(password)
        .bind(age)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Find a user by id. Soft-deleted users read as absent.
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
                WHERE id = $1 AND is_deleted = FALSE"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ServerError::UserNotFound { id: user_id })
    }

    /// List every non-deleted user.
    pub async fn all(&self) -> Result<Vec<User>> {
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
                WHERE is_deleted = FALSE
                ORDER BY login ASC"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    /// Case-insensitive substring search on `login`, ordered by login.
    ///
    /// The limit is applied by the database, not on the result set.
    pub async fn suggest(
        &self,
        filter: &str,
        limit: Option<i64>,
    ) -> Result<Vec<User>> {
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
                WHERE login ILIKE $1 AND is_deleted = FALSE
                ORDER BY login ASC
                LIMIT $2"
        ))
        .bind(format!("%{filter}%"))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Replace a user's data. Soft-deleted users reject updates.
    pub async fn update(
        &self,
        user_id: Uuid,
        login: &str,
        password: &str,
        age: i32,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"UPDATE users SET login = $1, password = $2, age = $3
                WHERE id = $4 AND is_deleted = FALSE"#,
        )
        .bind(login)
        .bind(password)
        .bind(age)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ServerError::UserNotFound { id: user_id });
        }

        Ok(())
    }

    /// Soft-delete a user. The row stays, every read path skips it.
    pub async fn delete(&self, user_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"UPDATE users SET is_deleted = TRUE
                WHERE id = $1 AND is_deleted = FALSE"#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ServerError::UserNotFound { id: user_id });
        }

        Ok(())
    }
}
