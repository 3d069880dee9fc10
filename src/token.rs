//! Manage json web tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServerError};

/// Default token lifespan, in seconds.
pub const DEFAULT_LIFESPAN: i64 = 60 * 15; // 15 minutes.

/// Pieces of information asserted on a JWT.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Identifies the expiration time on or after which the JWT must not be
    /// accepted for processing.
    pub exp: u64,
    /// Identifies the time at which the JWT was issued.
    pub iat: u64,
    /// Identifies the organization that issued the JWT.
    pub iss: String,
    /// Authenticated principal.
    pub sub: String,
}

/// Manage JWT tokens, signed with a shared secret.
#[derive(Clone)]
pub struct TokenManager {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    lifespan: i64,
}

impl TokenManager {
    /// Create a new [`TokenManager`] instance.
    pub fn new(issuer: &str, secret: &str) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_owned(),
            lifespan: DEFAULT_LIFESPAN,
        }
    }

    /// Set token lifespan, in seconds.
    ///
    /// Zero or negative values yield tokens that are correctly signed but
    /// already expired.
    pub fn lifespan(&mut self, seconds: i64) {
        self.lifespan = seconds;
    }

    /// Create a new signed token for `subject`.
    pub fn create(&self, subject: &str) -> Result<String> {
        let time = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let header = Header::new(self.algorithm);
        let claims = Claims {
            exp: time.saturating_add_signed(self.lifespan),
            iat: time,
            iss: self.issuer.clone(),
            sub: subject.to_owned(),
        };

        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Decode and check a token.
    ///
    /// A token is valid only while the current time is strictly before its
    /// expiry; the signature alone is not enough.
    pub fn decode(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is exact, no grace period.
        validation.leeway = 0;

        let claims =
            decode::<Claims>(token, &self.decoding_key, &validation)?.claims;

        // jsonwebtoken still accepts a token during its expiry second.
        let time = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        if claims.exp <= time {
            return Err(ServerError::InvalidToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "an-unguessable-test-secret";

    #[test]
    fn test_fresh_token_is_valid() {
        let manager = TokenManager::new("http://localhost", SECRET);

        let token = manager.create("alice").unwrap();
        let claims = manager.decode(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.iss, "http://localhost");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_zero_lifespan_is_expired() {
        let mut manager = TokenManager::new("http://localhost", SECRET);
        manager.lifespan(0);

        let token = manager.create("alice").unwrap();
        assert!(manager.decode(&token).is_err());
    }

    #[test]
    fn test_negative_lifespan_is_expired() {
        let mut manager = TokenManager::new("http://localhost", SECRET);
        manager.lifespan(-3600);

        let token = manager.create("alice").unwrap();
        assert!(manager.decode(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let manager = TokenManager::new("http://localhost", SECRET);
        let other = TokenManager::new("http://localhost", "another-secret");

        let token = manager.create("alice").unwrap();
        assert!(other.decode(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let manager = TokenManager::new("http://localhost", SECRET);

        assert!(manager.decode("not.a.token").is_err());
    }
}
