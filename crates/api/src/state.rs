use std::sync::Arc;

use bookshelf_core::service::BookService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Book catalog service, already wired to its store and id generator.
    pub service: Arc<BookService>,
    pub config: Arc<ServerConfig>,
}
