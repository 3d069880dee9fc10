//! Soft-delete a user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::AppState;
use crate::error::Result;
use crate::user::UserRepository;

pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode> {
    UserRepository::new(state.db.postgres.clone())
        .delete(user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
