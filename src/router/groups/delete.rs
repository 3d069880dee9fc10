//! Hard-delete a group.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::AppState;
use crate::error::Result;
use crate::group::GroupRepository;

pub async fn handler(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<StatusCode> {
    GroupRepository::new(state.db.postgres.clone())
        .delete(group_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
