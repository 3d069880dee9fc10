mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User as saved on database.
///
/// `password` is an Argon2 PHC string and `is_deleted` the soft-delete flag;
/// neither ever leaves the server.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    #[serde(skip)]
    pub password: String,
    pub age: i32,
    #[serde(skip)]
    pub is_deleted: bool,
    pub created_at: chrono::NaiveDate,
}
