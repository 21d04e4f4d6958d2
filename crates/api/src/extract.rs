//! Extractors that turn raw HTTP input into translator input.
//!
//! Both reject with [`AppError`] so that malformed input produces the same
//! `{"Code", "Message"}` body as every other failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use bookshelf_core::error::BookError;
use bookshelf_core::request::RawQuery;

use crate::error::AppError;

/// Query string as [`RawQuery`]. When a key repeats, the first value wins.
#[derive(Debug, Clone, Default)]
pub struct BookQuery(pub RawQuery);

impl<S: Send + Sync> FromRequestParts<S> for BookQuery {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Rejected query string");
                AppError(BookError::UnprocessableInput)
            })?;

        let mut query = RawQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "id" => &mut query.id,
                "title" => &mut query.title,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        Ok(Self(query))
    }
}

/// The raw request body. Decoding is left to the translator so that an
/// empty body and an undecodable one can be told apart.
#[derive(Debug, Clone)]
pub struct BookBody(pub Bytes);

impl<S: Send + Sync> FromRequest<S> for BookBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Failed to read request body");
            AppError(BookError::UnprocessableInput)
        })?;
        Ok(Self(bytes))
    }
}
