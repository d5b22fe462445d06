//! `bookshelf-catalog` — the book catalog and its reviews.
//!
//! The catalog is populated once from a fixed seed list; at runtime only the
//! review lists of existing books change.

pub mod book;
pub mod repository;
pub mod seed;

pub use book::{Book, Review};
pub use repository::{CatalogRepository, InMemoryCatalog, ReviewManager};
pub use seed::seed_books;
