//! Route definitions for the `/books` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::book;
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /          -> get (?id= or ?title=)
/// POST   /          -> create
/// DELETE /          -> delete (?id=)
/// GET    /list      -> list (?title=&limit=)
/// PUT    /update    -> update_details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::get).post(book::create).delete(book::delete))
        .route("/list", get(book::list))
        .route("/update", put(book::update_details))
}
