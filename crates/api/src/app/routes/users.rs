use std::sync::Arc;

use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};

use crate::app::dto::{CredentialsRequest, TokenResponse, body_or_default};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// A request without a JSON body counts as missing credentials.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let (username, password) = body_or_default(body)?.into_parts();
    services.register(username, password).await?;
    Ok((StatusCode::CREATED, "User registered"))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (username, password) = body_or_default(body)?.into_parts();
    let token = services.login(username, password).await?;
    Ok(Json(TokenResponse { token }))
}
