//! Create a group.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::group::{GroupRepository, Permission};
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    // Unknown permission tags are rejected at deserialization.
    pub permissions: Vec<Permission>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: Uuid,
}

/// Handler to create a group.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = GroupRepository::new(state.db.postgres.clone())
        .insert(&body.name, &body.permissions)
        .await?;

    Ok((StatusCode::CREATED, Json(Response { id })))
}
