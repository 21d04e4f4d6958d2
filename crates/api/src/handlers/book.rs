//! Handlers for the `/books` resource.
//!
//! Each handler translates raw input into a typed request and hands it to
//! the [`BookService`](bookshelf_core::service::BookService). Any failure
//! along the way short-circuits into an [`AppError`](crate::error::AppError).

use axum::extract::State;
use axum::Json;
use bookshelf_core::request::{
    CreateRequest, DeleteRequest, GetRequest, ListRequest, UpdateDetailsRequest,
};

use crate::error::AppResult;
use crate::extract::{BookBody, BookQuery};
use crate::response::BookResponse;
use crate::state::AppState;

/// GET /api/v1/books?id= (or ?title=)
pub async fn get(
    State(state): State<AppState>,
    BookQuery(query): BookQuery,
) -> AppResult<Json<BookResponse>> {
    let req = GetRequest::from_query(&query)?;
    let book = state.service.get(req).await?;
    Ok(Json(BookResponse::book(book)))
}

/// GET /api/v1/books/list?title=&limit=
pub async fn list(
    State(state): State<AppState>,
    BookQuery(query): BookQuery,
) -> AppResult<Json<BookResponse>> {
    let req = ListRequest::from_query(&query)?;
    let books = state.service.list(req).await?;
    Ok(Json(BookResponse::books(books)))
}

/// POST /api/v1/books
pub async fn create(
    State(state): State<AppState>,
    BookBody(body): BookBody,
) -> AppResult<Json<BookResponse>> {
    let req = CreateRequest::from_body(&body)?;
    let book = state.service.create(req).await?;
    Ok(Json(BookResponse::book(book)))
}

/// PUT /api/v1/books/update
pub async fn update_details(
    State(state): State<AppState>,
    BookBody(body): BookBody,
) -> AppResult<Json<BookResponse>> {
    let req = UpdateDetailsRequest::from_body(&body)?;
    let book = state.service.update_details(req).await?;
    Ok(Json(BookResponse::book(book)))
}

/// DELETE /api/v1/books?id=
pub async fn delete(
    State(state): State<AppState>,
    BookQuery(query): BookQuery,
) -> AppResult<Json<BookResponse>> {
    let req = DeleteRequest::from_query(&query)?;
    state.service.delete(req).await?;
    Ok(Json(BookResponse::empty()))
}
