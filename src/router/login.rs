//! Exchange API credentials for a signed token.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api_user::ApiUserRepository;
use crate::error::Result;
use crate::router::Valid;
use crate::{AppState, ServerError};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub token: String,
}

/// Handler to authenticate an API user.
///
/// An unknown login and a wrong password are indistinguishable to the
/// caller.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    let api_user = ApiUserRepository::new(state.db.postgres.clone())
        .find_by_login(&body.username)
        .await?
        .ok_or(ServerError::InvalidCredentials)?;

    state
        .crypto
        .verify_password(&body.password, &api_user.password)
        .map_err(|_| ServerError::InvalidCredentials)?;

    Ok(Json(Response {
        token: state.token.create(&api_user.login)?,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    use super::*;
    use crate::*;

    const LOGIN: &str = "metrics_collector";
    const PASSWORD: &str = "S3cretPassword";

    async fn seed_api_user(state: &AppState, pool: &Pool<Postgres>) {
        let hash = state.crypto.hash_password(PASSWORD).unwrap();
        sqlx::query("INSERT INTO apiusers (login, password) VALUES ($1, $2)")
            .bind(LOGIN)
            .bind(&hash)
            .execute(pool)
            .await
            .unwrap();
    }

    #[sqlx::test]
    async fn test_login_handler(pool: Pool<Postgres>) {
        let state = router::state(pool.clone());
        seed_api_user(&state, &pool).await;
        let app = app(state.clone());

        let response = make_request(
            None,
            app,
            Method::POST,
            "/login",
            json!({ "username": LOGIN, "password": PASSWORD }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Response = serde_json::from_slice(&body).unwrap();
        let claims = state.token.decode(&body.token).unwrap();
        assert_eq!(claims.sub, LOGIN);
    }

    #[sqlx::test]
    async fn test_login_with_wrong_password(pool: Pool<Postgres>) {
        let state = router::state(pool.clone());
        seed_api_user(&state, &pool).await;
        let app = app(state);

        let response = make_request(
            None,
            app,
            Method::POST,
            "/login",
            json!({ "username": LOGIN, "password": "WrongPassword" })
                .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[sqlx::test]
    async fn test_login_with_unknown_user(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state);

        let response = make_request(
            None,
            app,
            Method::POST,
            "/login",
            json!({ "username": "nobody", "password": PASSWORD }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
