//! Fetch users.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::AppState;
use crate::error::Result;
use crate::user::{User, UserRepository};

/// Get one user by id. Soft-deleted users read as absent.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>> {
    let user = UserRepository::new(state.db.postgres.clone())
        .find_by_id(user_id)
        .await?;

    Ok(Json(user))
}

/// List every non-deleted user.
pub async fn all(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(
        UserRepository::new(state.db.postgres.clone()).all().await?,
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use sqlx::{Pool, Postgres};

    use super::*;
    use crate::*;

    const AMELIA: &str = "11111111-1111-4111-8111-111111111111";
    const DELETED: &str = "44444444-4444-4444-8444-444444444444";

    #[sqlx::test(fixtures("../../../fixtures/users.sql"))]
    async fn test_get_user_handler(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state.clone());

        let path = format!("/user/{AMELIA}");
        let response =
            make_request(Some(&state), app, Method::GET, &path, String::default())
                .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: User = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.login, "amelia01");
        assert_eq!(body.age, 31);
        // sensitive columns never serialize.
        let raw = serde_json::to_value(&body).unwrap();
        assert!(raw.get("password").is_none());
        assert!(raw.get("is_deleted").is_none());
    }

    #[sqlx::test(fixtures("../../../fixtures/users.sql"))]
    async fn test_get_soft_deleted_user(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state.clone());

        let path = format!("/user/{DELETED}");
        let response =
            make_request(Some(&state), app, Method::GET, &path, String::default())
                .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[sqlx::test(fixtures("../../../fixtures/users.sql"))]
    async fn test_all_skips_soft_deleted(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state.clone());

        let response = make_request(
            Some(&state),
            app,
            Method::GET,
            "/user/all",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Vec<User> = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.len(), 3);
        assert!(body.iter().all(|user| user.login != "deleted1"));
    }
}
