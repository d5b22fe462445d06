use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{AuthState, auth_middleware};

pub mod books;
pub mod reviews;
pub mod system;
pub mod users;

/// The full route table. Only review mutation requires a token.
pub fn router(auth_state: AuthState) -> Router {
    let require_auth = axum::middleware::from_fn_with_state(auth_state, auth_middleware);

    Router::new()
        .route("/health", get(system::health))
        .route("/books", get(books::list_books))
        .route("/books/async", get(books::list_books_deferred))
        .route("/books/async/author/:name", get(books::books_by_author_deferred))
        .route("/books/isbn/:isbn", get(books::book_by_isbn_deferred))
        .route("/books/author/:name", get(books::books_by_author))
        .route("/books/title/promises/:title", get(books::books_by_title_or_404))
        .route("/books/title/:title", get(books::books_by_title))
        .route("/books/:isbn", get(books::get_book))
        .route(
            "/books/:isbn/reviews",
            get(reviews::list_reviews).merge(
                post(reviews::add_review)
                    .delete(reviews::delete_review)
                    .route_layer(require_auth),
            ),
        )
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
}
