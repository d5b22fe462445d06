use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookshelf_core::Username;

/// JWT claims model (transport-agnostic).
///
/// Timestamps are seconds since the Unix epoch, as in any standard JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Identity the token was issued to.
    pub username: Username,

    /// Issued-at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,
}

impl JwtClaims {
    pub fn new(username: Username, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            username,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate JWT claims.
///
/// Only the window shape and expiry are checked; an `iat` ahead of `now`
/// (clock skew between issuers) is accepted.
///
/// Note: this validates the *claims* only. Signature verification happens in
/// [`crate::jwt`].
pub fn validate_claims(claims: &JwtClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    let now = now.timestamp();
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_at(now: DateTime<Utc>) -> JwtClaims {
        JwtClaims::new(Username::new("alice"), now, Duration::hours(1))
    }

    #[test]
    fn valid_within_window() {
        let now = Utc::now();
        let claims = claims_at(now);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(validate_claims(&claims, now), Ok(()));
        assert_eq!(validate_claims(&claims, now + Duration::minutes(59)), Ok(()));
    }

    #[test]
    fn expired_after_ttl() {
        let now = Utc::now();
        let claims = claims_at(now);
        assert_eq!(
            validate_claims(&claims, now + Duration::hours(1)),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn accepts_future_iat_within_window() {
        let now = Utc::now();
        let claims = claims_at(now + Duration::minutes(5));
        assert_eq!(validate_claims(&claims, now), Ok(()));
    }

    #[test]
    fn rejects_inverted_window() {
        let now = Utc::now();
        let claims = claims_at(now);

        let inverted = JwtClaims { exp: claims.iat, ..claims };
        assert_eq!(
            validate_claims(&inverted, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
