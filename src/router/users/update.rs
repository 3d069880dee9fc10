//! Replace a user's data.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::router::users::create::Body;
use crate::user::UserRepository;

/// Handler to update a user. Soft-deleted users reject updates.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Valid(body): Valid<Body>,
) -> Result<StatusCode> {
    let password = state.crypto.hash_password(&body.password)?;
    UserRepository::new(state.db.postgres.clone())
        .update(user_id, &body.login, &password, body.age)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
