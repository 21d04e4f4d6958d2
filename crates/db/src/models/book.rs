//! Row mapping for the `books` table.

use bookshelf_core::book::{Book, BookStatus};
use bookshelf_core::types::Timestamp;
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: String,
    pub status: String,
    pub rating: i32,
    pub created_on: Timestamp,
    pub updated_on: Option<Timestamp>,
}

/// The `status` column held a value outside the known set.
#[derive(Debug, thiserror::Error)]
#[error("book {id} has unrecognised status {status:?}")]
pub struct UnknownStatus {
    pub id: String,
    pub status: String,
}

impl TryFrom<BookRow> for Book {
    type Error = UnknownStatus;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let Some(status) = BookStatus::parse(&row.status) else {
            return Err(UnknownStatus {
                id: row.id,
                status: row.status,
            });
        };
        Ok(Book {
            id: row.id,
            title: row.title,
            author: row.author,
            publisher: row.publisher,
            publish_date: row.publish_date,
            status,
            rating: row.rating,
            created_on: row.created_on,
            updated_on: row.updated_on,
        })
    }
}
