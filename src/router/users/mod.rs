//! Users-related HTTP API.
mod create;
mod delete;
mod get;
mod suggest;
mod update;

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET /user/all` goes to `all`.
        .route("/all", get(get::all))
        // `GET /user/suggest` goes to `suggest`.
        .route("/suggest", get(suggest::handler))
        // `GET /user/:ID` goes to `get`.
        .route("/{user_id}", get(get::handler))
        // `POST /user` goes to `create`.
        .route("/", post(create::handler))
        // `PUT /user/:ID` goes to `update`.
        .route("/{user_id}", put(update::handler))
        // `DELETE /user/:ID` soft-deletes.
        .route("/{user_id}", delete(delete::handler))
}
