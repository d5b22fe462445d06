//! Catalog lookups and review bookkeeping.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bookshelf_core::{DomainError, DomainResult, Username};

use crate::{Book, Review};

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const NOT_REVIEW_OWNER: &str = "You can only delete your own reviews";

/// Read access to the catalog.
pub trait CatalogRepository: Send + Sync {
    /// Every book in catalog order.
    fn all(&self) -> Vec<Book>;

    /// First book whose isbn matches exactly.
    fn by_isbn(&self, isbn: &str) -> DomainResult<Book>;

    /// Books whose author equals `name`, ignoring case. May be empty.
    fn by_author(&self, name: &str) -> Vec<Book>;

    /// Books whose title contains `fragment`, ignoring case. May be empty.
    fn by_title(&self, fragment: &str) -> Vec<Book>;
}

/// Mutation of a book's review list.
pub trait ReviewManager: Send + Sync {
    /// Reviews of the book in insertion order.
    fn list_reviews(&self, isbn: &str) -> DomainResult<Vec<Review>>;

    /// Append a review. A user may review the same book more than once.
    fn add_review(&self, isbn: &str, username: Username, text: String) -> DomainResult<()>;

    /// Remove the first review on the book written by `username`.
    fn delete_review(&self, isbn: &str, username: &Username) -> DomainResult<Review>;
}

impl<S> CatalogRepository for Arc<S>
where
    S: CatalogRepository + ?Sized,
{
    fn all(&self) -> Vec<Book> {
        (**self).all()
    }

    fn by_isbn(&self, isbn: &str) -> DomainResult<Book> {
        (**self).by_isbn(isbn)
    }

    fn by_author(&self, name: &str) -> Vec<Book> {
        (**self).by_author(name)
    }

    fn by_title(&self, fragment: &str) -> Vec<Book> {
        (**self).by_title(fragment)
    }
}

impl<S> ReviewManager for Arc<S>
where
    S: ReviewManager + ?Sized,
{
    fn list_reviews(&self, isbn: &str) -> DomainResult<Vec<Review>> {
        (**self).list_reviews(isbn)
    }

    fn add_review(&self, isbn: &str, username: Username, text: String) -> DomainResult<()> {
        (**self).add_review(isbn, username, text)
    }

    fn delete_review(&self, isbn: &str, username: &Username) -> DomainResult<Review> {
        (**self).delete_review(isbn, username)
    }
}

/// Process-lifetime catalog behind a single lock.
///
/// Every operation holds the guard for its whole body, so a find-then-remove
/// in `delete_review` cannot interleave with a concurrent add.
#[derive(Debug)]
pub struct InMemoryCatalog {
    books: RwLock<Vec<Book>>,
}

impl InMemoryCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub fn seeded() -> Self {
        Self::new(crate::seed_books())
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter(&self, pred: impl Fn(&Book) -> bool) -> Vec<Book> {
        self.read().iter().filter(|b| pred(b)).cloned().collect()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn all(&self) -> Vec<Book> {
        self.read().clone()
    }

    fn by_isbn(&self, isbn: &str) -> DomainResult<Book> {
        self.read()
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
            .ok_or_else(|| DomainError::not_found(BOOK_NOT_FOUND))
    }

    fn by_author(&self, name: &str) -> Vec<Book> {
        self.filter(|b| b.is_by(name))
    }

    fn by_title(&self, fragment: &str) -> Vec<Book> {
        self.filter(|b| b.title_contains(fragment))
    }
}

impl ReviewManager for InMemoryCatalog {
    fn list_reviews(&self, isbn: &str) -> DomainResult<Vec<Review>> {
        self.by_isbn(isbn).map(|b| b.reviews)
    }

    fn add_review(&self, isbn: &str, username: Username, text: String) -> DomainResult<()> {
        let mut books = self.write();
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| DomainError::not_found(BOOK_NOT_FOUND))?;

        book.reviews.push(Review::new(username, text));
        tracing::debug!(isbn, reviews = book.reviews.len(), "review appended");
        Ok(())
    }

    fn delete_review(&self, isbn: &str, username: &Username) -> DomainResult<Review> {
        let mut books = self.write();
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| DomainError::not_found(BOOK_NOT_FOUND))?;

        let idx = book
            .reviews
            .iter()
            .position(|r| &r.username == username)
            .ok_or_else(|| DomainError::forbidden(NOT_REVIEW_OWNER))?;

        Ok(book.reviews.remove(idx))
    }
}
