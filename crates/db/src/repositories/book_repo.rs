//! Repository for the `books` table.

use bookshelf_core::book::{BookUpdate, NewBook};
use sqlx::PgPool;

use crate::models::book::BookRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, author, publisher, publish_date, status, rating, \
    created_on, updated_on";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book under the given id, returning the created row.
    ///
    /// `created_on` comes from the database clock.
    pub async fn create(pool: &PgPool, id: &str, input: &NewBook) -> Result<BookRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (id, title, author, publisher, publish_date, status, rating, created_on)
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.publisher)
            .bind(&input.publish_date)
            .bind(input.status.as_str())
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<BookRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, BookRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the book with exactly this title. Ties go to the lowest id.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<BookRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM books WHERE title = $1 ORDER BY id COLLATE \"C\" LIMIT 1"
        );
        sqlx::query_as::<_, BookRow>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List books in byte order of id, optionally filtered by a
    /// case-insensitive title substring.
    ///
    /// `strpos` is used instead of `ILIKE` so `%` and `_` in the filter
    /// match literally.
    pub async fn list(
        pool: &PgPool,
        title: Option<&str>,
        limit: i64,
    ) -> Result<Vec<BookRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE ($1::TEXT IS NULL OR strpos(lower(title), lower($1)) > 0)
             ORDER BY id COLLATE \"C\"
             LIMIT $2"
        );
        sqlx::query_as::<_, BookRow>(&query)
            .bind(title)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Overwrite title, author, publisher, publish date and rating, and the
    /// status when one is given. Stamps `updated_on`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_details(
        pool: &PgPool,
        input: &BookUpdate,
    ) -> Result<Option<BookRow>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = $2,
                author = $3,
                publisher = $4,
                publish_date = $5,
                status = COALESCE($6, status),
                rating = $7,
                updated_on = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookRow>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.publisher)
            .bind(&input.publish_date)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a book by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
