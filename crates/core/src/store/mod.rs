//! Persistence seam consumed by the service.
//!
//! Implementations must be safe to share across concurrent requests. The
//! PostgreSQL implementation lives in `bookshelf-db`; [`InMemoryBookStore`]
//! backs the tests.

mod memory;

pub use memory::InMemoryBookStore;

use crate::book::{Book, BookUpdate, NewBook};
use crate::types::BookId;

/// Opaque failure from a store backend.
#[derive(Debug, thiserror::Error)]
#[error("store error: {source}")]
pub struct StoreError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StoreError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait::async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch a book by id. `None` means not found.
    async fn get(&self, id: &str) -> StoreResult<Option<Book>>;

    /// Fetch the book with exactly this title, lowest id first.
    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Book>>;

    /// Books ordered by id ascending, optionally filtered by a
    /// case-insensitive title substring. `limit` is already clamped.
    async fn list(&self, title: Option<&str>, limit: i64) -> StoreResult<Vec<Book>>;

    /// Persist a new book under `id`, stamping `created_on`.
    async fn create(&self, id: BookId, book: &NewBook) -> StoreResult<Book>;

    /// Overwrite the updatable columns and stamp `updated_on`.
    /// Returns `None` if the row no longer exists.
    async fn update_details(&self, update: &BookUpdate) -> StoreResult<Option<Book>>;

    /// Hard delete. Returns `true` if a row was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Cheap connectivity probe.
    async fn health_check(&self) -> StoreResult<()>;
}
