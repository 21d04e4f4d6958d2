//! Orchestration of the five book operations.
//!
//! Each operation validates first, then performs any existence check, then
//! mutates. Validation failures never reach the store. Store "not found"
//! outcomes become [`BookError::BookNotFound`]; any other store failure
//! becomes [`BookError::Internal`].

use std::sync::Arc;

use crate::book::Book;
use crate::error::{BookError, BookResult};
use crate::id::IdGenerator;
use crate::request::{
    BookLookup, CreateRequest, DeleteRequest, GetRequest, ListRequest, UpdateDetailsRequest,
};
use crate::store::BookStore;
use crate::validation::{validate_create, validate_update};

/// The book catalog service. Cheap to share behind an `Arc`.
pub struct BookService {
    store: Arc<dyn BookStore>,
    ids: Arc<dyn IdGenerator>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Fetch one book by id, or by exact title when no id was given.
    pub async fn get(&self, req: GetRequest) -> BookResult<Book> {
        tracing::debug!(lookup = ?req.lookup, "Fetching book");
        let found = match &req.lookup {
            BookLookup::Id(id) if id.is_empty() => return Err(BookError::ValidIdRequired),
            BookLookup::Id(id) => self.store.get(id).await?,
            BookLookup::Title(title) if title.is_empty() => {
                return Err(BookError::ValidIdRequired)
            }
            BookLookup::Title(title) => self.store.find_by_title(title).await?,
        };
        found.ok_or(BookError::BookNotFound)
    }

    /// List books in id order. No matches is an empty list, never an error.
    pub async fn list(&self, req: ListRequest) -> BookResult<Vec<Book>> {
        tracing::debug!(title = ?req.title, limit = req.limit, "Listing books");
        Ok(self.store.list(req.title.as_deref(), req.limit).await?)
    }

    pub async fn create(&self, req: CreateRequest) -> BookResult<Book> {
        tracing::debug!("Creating book");
        let new_book = validate_create(req.book)?;
        let id = self.ids.next_id();
        let book = self.store.create(id, &new_book).await?;
        tracing::info!(book_id = %book.id, "Book created");
        Ok(book)
    }

    /// Overwrite a book's details and return the stored result.
    ///
    /// The write is conditional on the row still existing, so a delete that
    /// lands between the existence check and the write yields `BookNotFound`.
    pub async fn update_details(&self, req: UpdateDetailsRequest) -> BookResult<Book> {
        let update = validate_update(req.update)?;
        tracing::debug!(book_id = %update.id, "Updating book");

        if self.store.get(&update.id).await?.is_none() {
            return Err(BookError::BookNotFound);
        }

        let book = self
            .store
            .update_details(&update)
            .await?
            .ok_or(BookError::BookNotFound)?;
        tracing::info!(book_id = %book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, req: DeleteRequest) -> BookResult<()> {
        if req.id.is_empty() {
            return Err(BookError::ValidIdRequired);
        }
        tracing::debug!(book_id = %req.id, "Deleting book");

        if self.store.get(&req.id).await?.is_none() {
            return Err(BookError::BookNotFound);
        }

        if !self.store.delete(&req.id).await? {
            return Err(BookError::BookNotFound);
        }
        tracing::info!(book_id = %req.id, "Book deleted");
        Ok(())
    }

    pub async fn health_check(&self) -> BookResult<()> {
        Ok(self.store.health_check().await?)
    }
}
