//! Replace a group's data.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::AppState;
use crate::error::Result;
use crate::group::GroupRepository;
use crate::router::Valid;
use crate::router::groups::create::Body;

pub async fn handler(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
    Valid(body): Valid<Body>,
) -> Result<StatusCode> {
    GroupRepository::new(state.db.postgres.clone())
        .update(group_id, &body.name, &body.permissions)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    use crate::*;

    const READERS: &str = "bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb";

    #[sqlx::test(fixtures("../../../fixtures/groups.sql"))]
    async fn test_update_handler(pool: Pool<Postgres>) {
        let state = router::state(pool.clone());
        let app = app(state.clone());

        let path = format!("/group/{READERS}");
        let response = make_request(
            Some(&state),
            app,
            Method::PUT,
            &path,
            json!({ "name": "reviewers", "permissions": ["READ", "SHARE"] })
                .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let name: String =
            sqlx::query_scalar("SELECT name FROM groups WHERE id = $1::uuid")
                .bind(READERS)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(name, "reviewers");
    }

    #[sqlx::test(fixtures("../../../fixtures/groups.sql"))]
    async fn test_update_unknown_group(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state.clone());

        let response = make_request(
            Some(&state),
            app,
            Method::PUT,
            "/group/99999999-9999-4999-8999-999999999999",
            json!({ "name": "reviewers", "permissions": [] }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
