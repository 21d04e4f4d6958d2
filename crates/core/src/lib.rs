//! Domain layer for the bookshelf catalog service.
//!
//! Holds the book model, the fixed error taxonomy, the request translator,
//! validation rules and the orchestration service. Nothing here knows about
//! HTTP or SQL; persistence is reached through the [`store::BookStore`] trait.

pub mod book;
pub mod error;
pub mod id;
pub mod request;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
