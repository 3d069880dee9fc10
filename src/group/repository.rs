//! Handle database requests for groups and their memberships.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::{Result, ServerError};
use crate::group::{Group, Permission};

const GROUP_COLUMNS: &str = "id, name, permissions";

#[derive(Clone)]
pub struct GroupRepository {
    pool: Pool<Postgres>,
}

impl GroupRepository {
    /// Create a new [`GroupRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new group and return its generated id.
    pub async fn insert(
        &self,
        name: &str,
        permissions: &[Permission],
    ) -> Result<Uuid> {
        let id = sqlx::query_scalar(
            r#"INSERT INTO groups (name, permissions)
                VALUES ($1, $2)
                RETURNING id"#,
        )
        .bind(name)
        .bind(permissions)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Find a group by id.
    pub async fn find_by_id(&self, group_id: Uuid) -> Result<Group> {
        sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups WHERE id = $1"
        ))
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ServerError::GroupNotFound { id: group_id })
    }

    /// List every group.
    pub async fn all(&self) -> Result<Vec<Group>> {
        Ok(sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    /// Replace a group's data.
    pub async fn update(
        &self,
        group_id: Uuid,
        name: &str,
        permissions: &[Permission],
    ) -> Result<()> {
        let result = sqlx::query(
            r#"UPDATE groups SET name = $1, permissions = $2 WHERE id = $3"#,
        )
        .bind(name)
        .bind(permissions)
        .bind(group_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ServerError::GroupNotFound { id: group_id });
        }

        Ok(())
    }

    /// Hard-delete a group. Association rows follow through the foreign key
    /// cascade.
    pub async fn delete(&self, group_id: Uuid) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM groups WHERE id = $1"#)
            .bind(group_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServerError::GroupNotFound { id: group_id });
        }

        Ok(())
    }

    /// Assign every user in `user_ids` to `group_id`, all or nothing.
    ///
    /// The group is resolved before the transaction opens: a missing group
    /// short-circuits without a single user lookup. User lookups then happen
    /// inside the transaction, so a row deleted concurrently either
    /// serializes behind this call or fails it, never half-applies it.
    /// Re-assigning an existing pair is a no-op: the composite primary key
    /// on the association table plus `ON CONFLICT DO NOTHING` keep the
    /// operation idempotent.
    pub async fn assign_users(
        &self,
        group_id: Uuid,
        user_ids: &[Uuid],
    ) -> Result<()> {
        self.find_by_id(group_id).await?;

        let mut tx = self.pool.begin().await?;

        for &user_id in user_ids {
            let found: Option<Uuid> = sqlx::query_scalar(
                r#"SELECT id FROM users
                    WHERE id = $1 AND is_deleted = FALSE"#,
            )
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

            if found.is_none() {
                // Rolls back associations already written for earlier ids.
                tx.rollback().await?;
                return Err(ServerError::UserNotFound { id: user_id });
            }

            sqlx::query(
                r#"INSERT INTO user_groups (user_id, group_id)
                    VALUES ($1, $2)
                    ON CONFLICT (user_id, group_id) DO NOTHING"#,
            )
            .bind(user_id)
            .bind(group_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
