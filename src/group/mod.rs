mod repository;

pub use repository::*;

use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgHasArrayType, PgTypeInfo};
use uuid::Uuid;

/// Permission tags a [`Group`] can carry. Fixed enumeration, mirrored by the
/// `permission` type on database.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "permission", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Read,
    Write,
    Delete,
    Share,
    UploadFiles,
}

impl PgHasArrayType for Permission {
    fn array_type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("_permission")
    }
}

/// Group as saved on database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub permissions: Vec<Permission>,
}
