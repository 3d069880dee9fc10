//! Groups-related HTTP API.
mod assign;
mod create;
mod delete;
mod get;
mod update;

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET /group/all` goes to `all`.
        .route("/all", get(get::all))
        // `POST /group/assign` links many users to one group.
        .route("/assign", post(assign::handler))
        // `GET /group/:ID` goes to `get`.
        .route("/{group_id}", get(get::handler))
        // `POST /group` goes to `create`.
        .route("/", post(create::handler))
        // `PUT /group/:ID` goes to `update`.
        .route("/{group_id}", put(update::handler))
        // `DELETE /group/:ID` hard-deletes.
        .route("/{group_id}", delete(delete::handler))
}
