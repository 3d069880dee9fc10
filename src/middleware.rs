//! Middlewares for routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::Result;
use crate::{AppState, ServerError};

/// Header carrying the bearer credential.
pub const TOKEN_HEADER: &str = "x-access-token";

/// Reject unauthenticated requests before they reach business logic.
///
/// An absent header and an unverifiable credential are different client
/// mistakes and keep different statuses: `MissingToken` maps to 401,
/// `InvalidToken` (garbage, wrong signature or expired) to 403. Decoded
/// claims are attached to the request for downstream handlers. No state is
/// kept between requests.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = match req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|header| header.to_str().ok())
    {
        Some(token) => token,
        None => return Err(ServerError::MissingToken),
    };

    let claims = state
        .token
        .decode(token)
        .map_err(|_| ServerError::InvalidToken)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::extract::Request;
    use axum::http::{Method, StatusCode};
    use sqlx::{Pool, Postgres};
    use tower::util::ServiceExt;

    use super::TOKEN_HEADER;
    use crate::*;

    #[sqlx::test(fixtures("../fixtures/users.sql"))]
    async fn test_missing_token_is_unauthorized(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/user/all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[sqlx::test(fixtures("../fixtures/users.sql"))]
    async fn test_garbage_token_is_forbidden(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/user/all")
                    .header(TOKEN_HEADER, "not.a.token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[sqlx::test(fixtures("../fixtures/users.sql"))]
    async fn test_expired_token_is_forbidden(pool: Pool<Postgres>) {
        let state = router::state(pool);
        let app = app(state.clone());

        let mut expired = state.token.clone();
        expired.lifespan(0);
        let token = expired.create("tester").unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/user/all")
                    .header(TOKEN_HEADER, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[sqlx::test(fixtures("../fixtures/users.sql"))]
    async fn test_valid_token_passes(pool: Pool<Postgres>) {
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
    }
}
