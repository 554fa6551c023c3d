//! Bearer token issuing and verification.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// JWT payload. `sub` carries the party id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs and verifies HS256 tokens with the configured secret.
///
/// Cloning shares the keys.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    expire_seconds: i64,
}

impl TokenService {
    pub fn new(secret: &str, expire_seconds: i64) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            expire_seconds,
        }
    }

    /// Issues a token for `party_id` valid for the configured lifetime.
    pub fn issue(&self, party_id: i32) -> Result<String, AppError> {
        self.issue_with_lifetime(party_id, self.expire_seconds)
    }

    fn issue_with_lifetime(&self, party_id: i32, lifetime: i64) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: party_id.to_string(),
            iat: now,
            exp: now + lifetime,
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.keys.encoding,
        )?)
    }

    /// Verifies the signature and expiry, returning the party id.
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.keys.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("subject '{}'", data.claims.sub)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_issued_token() {
        let tokens = TokenService::new("secret", 60);
        let token = tokens.issue(42).unwrap();

        assert_eq!(tokens.verify(&token).unwrap(), 42);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("secret", 60).issue(1).unwrap();
        let result = TokenService::new("other", 60).verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("secret", 60);
        // Past the default validation leeway
        let token = tokens.issue_with_lifetime(1, -600).unwrap();

        assert!(matches!(tokens.verify(&token), Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn rejects_garbage() {
        let tokens = TokenService::new("secret", 60);

        assert!(matches!(
            tokens.verify("not.a.token"),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
