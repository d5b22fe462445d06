//! Catalog lookups.
//!
//! The `*_deferred` handlers complete on a separate task (and `/books/async`
//! after a delay) but return exactly what their direct counterparts return.

use std::sync::Arc;

use axum::{Extension, Json, extract::Path};

use bookshelf_catalog::Book;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub const NO_BOOKS_FOUND: &str = "No books found";

pub async fn list_books(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<Book>> {
    Json(services.books.all())
}

pub async fn get_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(services.books.by_isbn(&isbn)?))
}

pub async fn books_by_author(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> Json<Vec<Book>> {
    Json(services.books.by_author(&name))
}

pub async fn books_by_title(
    Extension(services): Extension<Arc<AppServices>>,
    Path(title): Path<String>,
) -> Json<Vec<Book>> {
    Json(services.books.by_title(&title))
}

/// All books, after the configured delay. Only this request waits.
pub async fn list_books_deferred(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = tokio::spawn(async move {
        tokio::time::sleep(services.async_delay).await;
        services.books.all()
    })
    .await?;
    Ok(Json(books))
}

pub async fn book_by_isbn_deferred(
    Extension(services): Extension<Arc<AppServices>>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let book = tokio::spawn(async move { services.books.by_isbn(&isbn) }).await??;
    Ok(Json(book))
}

pub async fn books_by_author_deferred(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = tokio::spawn(async move { services.books.by_author(&name) }).await?;
    Ok(Json(books))
}

/// Title search that treats an empty result as 404.
pub async fn books_by_title_or_404(
    Extension(services): Extension<Arc<AppServices>>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = tokio::spawn(async move { services.books.by_title(&title) }).await?;
    if books.is_empty() {
        return Err(ApiError::NotFound(NO_BOOKS_FOUND.to_string()));
    }
    Ok(Json(books))
}
