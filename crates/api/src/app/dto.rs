use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `/users/register` and `/users/login`. Absent fields read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    pub fn into_parts(self) -> (String, String) {
        (
            self.username.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Body of `POST /books/:isbn/reviews`.
///
/// A missing `review` field is stored as an empty text, so the review is
/// always serialized with a `"review": ""` key rather than without one.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub review: Option<String>,
}

/// Unwrap a JSON body, treating a request sent without a JSON content type
/// (including no body at all) as `T::default()`.
///
/// Bodies that claim to be JSON but fail to parse or match `T` are a 400.
pub fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected request body");
            Err(ApiError::BadRequest(rejection.body_text()))
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
