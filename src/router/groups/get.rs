//! Fetch groups.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::AppState;
use crate::error::Result;
use crate::group::{Group, GroupRepository};

/// Get one group by id.
pub async fn handler(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Group>> {
    let group = GroupRepository::new(state.db.postgres.clone())
        .find_by_id(group_id)
        .await?;

    Ok(Json(group))
}

/// List every group.
pub async fn all(State(state): State<AppState>) -> Result<Json<Vec<Group>>> {
    Ok(Json(
        GroupRepository::new(state.db.postgres.clone()).all().await?,
    ))
}
