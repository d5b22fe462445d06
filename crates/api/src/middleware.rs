use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use bookshelf_auth::JwtValidator;

use crate::app::errors::ApiError;
use crate::context::UserContext;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Gate a route behind a bearer token.
///
/// A missing or unusable `Authorization` header is 401; a token that fails
/// signature or expiry checks is 403.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = state.jwt.validate(token, Utc::now()).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        ApiError::forbidden()
    })?;

    req.extensions_mut().insert(UserContext::new(claims.username));

    Ok(next.run(req).await)
}

/// The second space-separated part of the header, whatever the scheme.
fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?;

    let header = header.to_str().map_err(|_| ApiError::Unauthorized)?;

    match header.split(' ').nth(1) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        h
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert!(matches!(
            extract_bearer(&HeaderMap::new()),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn header_without_token_is_unauthorized() {
        assert!(matches!(extract_bearer(&headers("Bearer")), Err(ApiError::Unauthorized)));
        assert!(matches!(extract_bearer(&headers("Bearer ")), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn takes_second_part() {
        assert_eq!(extract_bearer(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(extract_bearer(&headers("Token xyz extra")).unwrap(), "xyz");
    }
}
