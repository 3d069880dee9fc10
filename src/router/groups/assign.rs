//! Assign many users to a group, all or nothing.

use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::group::GroupRepository;
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub group_id: Uuid,
    pub user_ids: Vec<Uuid>,
}

/// Handler to link every listed user to the group.
///
/// Either every association row is written or none is; the first unknown
/// user id rolls the whole operation back.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<StatusCode> {
    GroupRepository::new(state.db.postgres.clone())
        .assign_users(body.group_id, &body.user_ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
