//! Strongly-typed identifiers used across the domain.
//!
//! Both are opaque strings: an ISBN is never checked against the real
//! checksum format, and usernames are not guaranteed unique.

use serde::{Deserialize, Serialize};

/// Catalog key of a book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

/// Name an account registered with and the identity carried by tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

impl_string_newtype!(Isbn);
impl_string_newtype!(Username);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Username::new("alice")).unwrap();
        assert_eq!(json, "\"alice\"");

        let isbn: Isbn = serde_json::from_str("\"01234\"").unwrap();
        assert_eq!(isbn, "01234");
    }

    #[test]
    fn compares_exactly() {
        assert_ne!(Isbn::new("12345"), Isbn::new("12345 "));
        assert!(Username::new("").is_empty());
    }
}
