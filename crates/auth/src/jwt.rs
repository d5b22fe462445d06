//! HS256 bearer tokens.

use std::fmt::{self, Debug, Formatter};

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use bookshelf_core::Username;

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not a JWT, wrong algorithm, or signature mismatch.
    #[error("invalid token: {0}")]
    Malformed(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("failed to sign token: {0}")]
    Encoding(String),
}

/// Signs tokens carrying a username claim.
pub trait JwtIssuer: Send + Sync {
    fn issue(&self, username: &Username, now: DateTime<Utc>) -> Result<String, TokenError>;
}

/// Verifies signature and validity window, yielding the claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError>;
}

/// Shared-secret HS256 issuer and validator.
pub struct Hs256Jwt {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl Debug for Hs256Jwt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hs256Jwt").field("ttl", &self.ttl).finish()
    }
}

impl Hs256Jwt {
    /// Tokens valid for one hour.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::hours(1))
    }

    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        // Expiry is checked by `validate_claims` against the caller's clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }
}

impl JwtIssuer for Hs256Jwt {
    fn issue(&self, username: &Username, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = JwtClaims::new(username.clone(), now, self.ttl);
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

impl JwtValidator for Hs256Jwt {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError> {
        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::new("alice")
    }

    #[test]
    fn issued_token_validates_as_same_user() {
        let jwt = Hs256Jwt::new(b"test-secret");
        let now = Utc::now();
        let token = jwt.issue(&alice(), now).unwrap();

        let claims = jwt.validate(&token, now).unwrap();
        assert_eq!(claims.username, alice());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_expires_after_ttl() {
        let jwt = Hs256Jwt::new(b"test-secret");
        let now = Utc::now();
        let token = jwt.issue(&alice(), now).unwrap();

        assert_eq!(
            jwt.validate(&token, now + Duration::hours(2)),
            Err(TokenError::Claims(TokenValidationError::Expired))
        );
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let now = Utc::now();
        let token = Hs256Jwt::new(b"one").issue(&alice(), now).unwrap();
        assert!(matches!(
            Hs256Jwt::new(b"two").validate(&token, now),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let jwt = Hs256Jwt::new(b"test-secret");
        let now = Utc::now();
        let token = jwt.issue(&alice(), now).unwrap();
        let other = jwt.issue(&Username::new("mallory"), now).unwrap();

        // Splice mallory's payload under alice's signature.
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(matches!(
            jwt.validate(&forged, now),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        let jwt = Hs256Jwt::new(b"test-secret");
        assert!(matches!(
            jwt.validate("not-a-jwt", Utc::now()),
            Err(TokenError::Malformed(_))
        ));
    }
}
