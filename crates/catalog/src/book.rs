use serde::{Deserialize, Serialize};

use bookshelf_core::{Isbn, Username};

/// A catalog entry. Only `reviews` is mutated after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub reviews: Vec<Review>,
}

impl Book {
    pub fn new(isbn: impl Into<Isbn>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: Vec::new(),
        }
    }

    /// Exact, case-insensitive author match.
    pub fn is_by(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }

    /// Case-insensitive substring match on the title.
    pub fn title_contains(&self, fragment: &str) -> bool {
        self.title.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// A review left by a user. Serialized as `{"username": .., "review": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub username: Username,
    #[serde(rename = "review")]
    pub text: String,
}

impl Review {
    pub fn new(username: Username, text: impl Into<String>) -> Self {
        Self {
            username,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_uses_review_key_on_the_wire() {
        let review = Review::new(Username::new("alice"), "great");
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "alice", "review": "great" }));
    }

    #[test]
    fn book_serializes_with_empty_reviews() {
        let book = Book::new("12345", "The Great Gatsby", "F. Scott Fitzgerald");
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["isbn"], "12345");
        assert_eq!(json["reviews"], serde_json::json!([]));
    }

    #[test]
    fn author_match_is_exact_but_case_insensitive() {
        let book = Book::new("34567", "1984", "George Orwell");
        assert!(book.is_by("george orwell"));
        assert!(book.is_by("GEORGE ORWELL"));
        assert!(!book.is_by("Orwell"));
    }

    #[test]
    fn title_match_is_substring() {
        let book = Book::new("12345", "The Great Gatsby", "F. Scott Fitzgerald");
        assert!(book.title_contains("great"));
        assert!(book.title_contains(""));
        assert!(!book.title_contains("greatest"));
    }
}
