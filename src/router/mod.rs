//! HTTP routes and shared extractors.

pub mod groups;
pub mod login;
pub mod status;
pub mod users;

use std::sync::LazyLock;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::ServerError;

static LOGIN_REGEX: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"^[a-zA-Z]\w{5,29}$").expect("hardcoded regex")
});

static PASSWORD_REGEX: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"^[a-zA-Z0-9]{8,30}$").expect("hardcoded regex")
});

/// 6 to 30 word characters, starting with a letter.
pub fn validate_login(login: &str) -> Result<(), ValidationError> {
    if LOGIN_REGEX.is_match(login) {
        Ok(())
    } else {
        Err(ValidationError::new("login"))
    }
}

/// 8 to 30 letters or digits, no punctuation or spaces.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if PASSWORD_REGEX.is_match(password) {
        Ok(())
    } else {
        Err(ValidationError::new("password"))
    }
}

/// JSON body extractor that runs the payload's `validator` rules after
/// deserialization.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Valid(value))
    }
}

/// Same as [`Valid`], for query strings.
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidQuery(value))
    }
}

#[cfg(test)]
pub(crate) fn state(pool: sqlx::Pool<sqlx::Postgres>) -> crate::AppState {
    use std::sync::Arc;

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        db: crate::database::Database { postgres: pool },
        crypto: Arc::new(
            crate::crypto::PasswordManager::new(Some(crate::config::Argon2 {
                memory_cost: 1024 * 8,
                iterations: 1,
                parallelism: 1,
                hash_length: 32,
            }))
            .expect("argon2 parameters"),
        ),
        token: crate::token::TokenManager::new(
            "http://localhost",
            "test-secret-do-not-use-in-production",
        ),
    }
}
