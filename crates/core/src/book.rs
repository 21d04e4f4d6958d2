//! The book entity and its value constraints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BookId, Timestamp};

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Lowest accepted rating on create.
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating on create.
pub const MAX_RATING: i32 = 3;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    CheckedIn,
    CheckedOut,
}

impl BookStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckedIn => "CheckedIn",
            Self::CheckedOut => "CheckedOut",
        }
    }

    /// Parse the exact wire spelling. Matching is case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CheckedIn" => Some(Self::CheckedIn),
            "CheckedOut" => Some(Self::CheckedOut),
            _ => None,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: String,
    pub status: BookStatus,
    pub rating: i32,
    pub created_on: Timestamp,
    /// `None` until the first successful update.
    pub updated_on: Option<Timestamp>,
}

/// A validated create payload. The store assigns `created_on`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: String,
    pub status: BookStatus,
    pub rating: i32,
}

/// A validated update payload.
///
/// Text fields and `rating` replace the stored values verbatim, including
/// empty strings and zero. `status: None` keeps the stored status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookUpdate {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: String,
    pub status: Option<BookStatus>,
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_exact() {
        assert_eq!(BookStatus::parse("CheckedIn"), Some(BookStatus::CheckedIn));
        assert_eq!(BookStatus::parse("CheckedOut"), Some(BookStatus::CheckedOut));
        assert_eq!(BookStatus::parse("checkedin"), None);
        assert_eq!(BookStatus::parse(""), None);
    }

    #[test]
    fn status_defaults_to_checked_in() {
        assert_eq!(BookStatus::default(), BookStatus::CheckedIn);
    }

    #[test]
    fn book_serializes_camel_case() {
        let book = Book {
            id: "b1".into(),
            title: "T".into(),
            author: "A".into(),
            publisher: String::new(),
            publish_date: "1999".into(),
            status: BookStatus::CheckedOut,
            rating: 2,
            created_on: chrono::Utc::now(),
            updated_on: None,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["status"], "CheckedOut");
        assert_eq!(json["publishDate"], "1999");
        assert!(json["createdOn"].is_string());
        assert!(json["updatedOn"].is_null());
    }
}
