//! Auto-suggest users by login substring.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::router::ValidQuery;
use crate::user::{User, UserRepository};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Params {
    #[validate(length(min = 1, message = "Filter must not be empty."))]
    pub filter: String,
    #[validate(range(min = 1, message = "Limit must be at least 1."))]
    pub limit: Option<i64>,
}

/// Case-insensitive substring search on user logins, ordered by login.
pub async fn handler(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<Params>,
) -> Result<Json<Vec<User>>> {
    Ok(Json(
        UserRepository::new(state.db.postgres.clone())
            .suggest(&params.filter, params.limit)
            .await?,
    ))
}
