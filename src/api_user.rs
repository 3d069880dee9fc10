//! Credential-only principals used to obtain an API token.
//!
//! An [`ApiUser`] is distinct from the business [`crate::user::User`] and
//! deliberately has no `Serialize` impl, so it can never end up in a
//! business response.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::Result;

/// API credential as saved on database. `password` is an Argon2 PHC string.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct ApiUser {
    pub id: Uuid,
    pub login: String,
    pub password: String,
}

#[derive(Clone)]
pub struct ApiUserRepository {
    pool: Pool<Postgres>,
}

impl ApiUserRepository {
    /// Create a new [`ApiUserRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Find an API user by login.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<ApiUser>> {
        Ok(sqlx::query_as::<_, ApiUser>(
            r#"SELECT id, login, password FROM apiusers WHERE login = $1"#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?)
    }
}
