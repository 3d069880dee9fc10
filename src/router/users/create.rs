//! Create a user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::user::UserRepository;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(custom(
        function = "crate::router::validate_login",
        message = "Login must be 6 to 30 word characters and start with a letter."
    ))]
    pub login: String,
    #[validate(custom(
        function = "crate::router::validate_password",
        message = "Password must be 8 to 30 letters or digits."
    ))]
    pub password: String,
    #[validate(range(min = 4, max = 130, message = "Age must be between 4 and 130."))]
    pub age: i32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: Uuid,
}

/// Handler to create a user. The password is stored hashed, never verbatim.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Response>)> {
    let password = state.crypto.hash_password(&body.password)?;
    let id = UserRepository::new(state.db.postgres.clone())
        .insert(&body.login, &password, body.age)
        .await?;

    Ok((StatusCode::CREATED, Json(Response { id })))
}

#[cfg(test)]
pub(super) mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    use super::*;
    use crate::*;

    #[sqlx::test]
    async fn test_create_handler(pool: Pool<Postgres>) {
        let state = router::state(pool.clone());
        let app = app(state.clone());

        let req_body = Body {
            login: "freshuser".into(),
            password: "Pass1234".into(),
            age: 25,
        };
        let response = make_request(
            Some(&state),
            app,
            Method::POST,
            "/user",
            json!(req_body).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Response = serde_json::from_slice(&body).unwrap();

        // Stored credential must be a PHC string, not the raw password.
        let stored: String =
            sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
                .bind(body.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert_ne!(stored, "Pass1234");
    }

    #[sqlx::test]
    async fn test_create_with_invalid_login(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state.clone());

        // starts with a digit.
        let response = make_request(
            Some(&state),
            app,
            Method::POST,
            "/user",
            json!({ "login": "1baduser", "password": "Pass1234", "age": 25 })
                .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    async fn test_create_with_out_of_range_age(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state.clone());

        let response = make_request(
            Some(&state),
            app,
            Method::POST,
            "/user",
            json!({ "login": "freshuser", "password": "Pass1234", "age": 131 })
                .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
