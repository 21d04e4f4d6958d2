use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use super::{BookStore, StoreError, StoreResult};
use crate::book::{Book, BookUpdate, NewBook};
use crate::types::BookId;

/// Process-local store keyed by id. The `BTreeMap` keeps id order for free.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: RwLock<BTreeMap<BookId, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl BookStore for InMemoryBookStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Book>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.values().find(|b| b.title == title).cloned())
    }

    async fn list(&self, title: Option<&str>, limit: i64) -> StoreResult<Vec<Book>> {
        let needle = title.map(str::to_lowercase);
        let limit = usize::try_from(limit).unwrap_or(0);
        let books = self.books.read().await;
        Ok(books
            .values()
            .filter(|b| match &needle {
                Some(n) => b.title.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, id: BookId, book: &NewBook) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&id) {
            return Err(StoreError::new(format!("duplicate book id {id}")));
        }
        let record = Book {
            id: id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            publish_date: book.publish_date.clone(),
            status: book.status,
            rating: book.rating,
            created_on: Utc::now(),
            updated_on: None,
        };
        books.insert(id, record.clone());
        Ok(record)
    }

    async fn update_details(&self, update: &BookUpdate) -> StoreResult<Option<Book>> {
        let mut books = self.books.write().await;
        let Some(book) = books.get_mut(&update.id) else {
            return Ok(None);
        };
        book.title = update.title.clone();
        book.author = update.author.clone();
        book.publisher = update.publisher.clone();
        book.publish_date = update.publish_date.clone();
        if let Some(status) = update.status {
            book.status = status;
        }
        book.rating = update.rating;
        book.updated_on = Some(Utc::now());
        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        Ok(self.books.write().await.remove(id).is_some())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookStatus;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.into(),
            author: "A".into(),
            publisher: String::new(),
            publish_date: String::new(),
            status: BookStatus::CheckedIn,
            rating: 1,
        }
    }

    #[tokio::test]
    async fn duplicate_ids_are_refused() {
        let store = InMemoryBookStore::new();
        store.create("1".into(), &new_book("a")).await.unwrap();
        assert!(store.create("1".into(), &new_book("b")).await.is_err());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn list_filters_case_insensitively_in_id_order() {
        let store = InMemoryBookStore::new();
        store.create("2".into(), &new_book("Rust in Action")).await.unwrap();
        store.create("1".into(), &new_book("Programming RUST")).await.unwrap();
        store.create("3".into(), &new_book("Go Basics")).await.unwrap();

        let found = store.list(Some("rust"), 200).await.unwrap();
        let ids: Vec<_> = found.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[tokio::test]
    async fn update_of_missing_row_returns_none() {
        let store = InMemoryBookStore::new();
        let update = BookUpdate {
            id: "nope".into(),
            title: String::new(),
            author: String::new(),
            publisher: String::new(),
            publish_date: String::new(),
            status: None,
            rating: 0,
        };
        assert!(store.update_details(&update).await.unwrap().is_none());
    }
}
