use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};

use bookshelf_catalog::Review;

use crate::app::dto::{ReviewRequest, body_or_default};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::UserContext;

pub const NO_REVIEWS_FOUND: &str = "No reviews found for this book";

pub async fn list_reviews(
    Extension(services): Extension<Arc<AppServices>>,
    Path(isbn): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = services
        .reviews
        .list_reviews(&isbn)
        .map_err(|_| ApiError::NotFound(NO_REVIEWS_FOUND.to_string()))?;
    Ok(Json(reviews))
}

pub async fn add_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Path(isbn): Path<String>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let text = body_or_default(body)?.review.unwrap_or_default();
    services
        .reviews
        .add_review(&isbn, user.username().clone(), text)?;

    tracing::info!(%isbn, username = %user.username(), "review added");
    Ok((StatusCode::CREATED, "Review added"))
}

/// Removes the caller's earliest review on the book.
pub async fn delete_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Path(isbn): Path<String>,
) -> Result<&'static str, ApiError> {
    services.reviews.delete_review(&isbn, user.username())?;

    tracing::info!(%isbn, username = %user.username(), "review deleted");
    Ok("Review deleted")
}
