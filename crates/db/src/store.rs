use bookshelf_core::book::{Book, BookUpdate, NewBook};
use bookshelf_core::store::{BookStore, StoreError, StoreResult};
use bookshelf_core::types::BookId;

use crate::models::book::BookRow;
use crate::repositories::BookRepo;
use crate::DbPool;

/// [`BookStore`] backed by PostgreSQL through [`BookRepo`].
#[derive(Debug, Clone)]
pub struct PgBookStore {
    pool: DbPool,
}

impl PgBookStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_book(row: BookRow) -> StoreResult<Book> {
    Book::try_from(row).map_err(|e| {
        tracing::warn!(book_id = %e.id, status = %e.status, "Stored book has unknown status");
        StoreError::new(e)
    })
}

fn to_books(rows: Vec<BookRow>) -> StoreResult<Vec<Book>> {
    rows.into_iter().map(to_book).collect()
}

#[async_trait::async_trait]
impl BookStore for PgBookStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Book>> {
        BookRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::new)?
            .map(to_book)
            .transpose()
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Book>> {
        BookRepo::find_by_title(&self.pool, title)
            .await
            .map_err(StoreError::new)?
            .map(to_book)
            .transpose()
    }

    async fn list(&self, title: Option<&str>, limit: i64) -> StoreResult<Vec<Book>> {
        let rows = BookRepo::list(&self.pool, title, limit)
            .await
            .map_err(StoreError::new)?;
        to_books(rows)
    }

    async fn create(&self, id: BookId, book: &NewBook) -> StoreResult<Book> {
        let row = BookRepo::create(&self.pool, &id, book)
            .await
            .map_err(StoreError::new)?;
        to_book(row)
    }

    async fn update_details(&self, update: &BookUpdate) -> StoreResult<Option<Book>> {
        BookRepo::update_details(&self.pool, update)
            .await
            .map_err(StoreError::new)?
            .map(to_book)
            .transpose()
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        BookRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::new)
    }
}
