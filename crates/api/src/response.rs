//! Response envelope shared by every successful book endpoint.
//!
//! `{"book": {...}}` for single-book operations, `{"books": [...]}` for
//! listing, and `{}` for delete. Fields that do not apply are omitted, so an
//! error body also parses as an (empty) envelope.

use bookshelf_core::book::Book;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<Book>>,
}

impl BookResponse {
    pub fn book(book: Book) -> Self {
        Self {
            book: Some(book),
            books: None,
        }
    }

    /// A listing. An empty list is still written as `"books": []`.
    pub fn books(books: Vec<Book>) -> Self {
        Self {
            book: None,
            books: Some(books),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
