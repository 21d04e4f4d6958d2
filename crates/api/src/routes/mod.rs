pub mod book;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /books            GET (by id or title), POST, DELETE
/// /books/list       GET
/// /books/update     PUT
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/books", book::router())
}
