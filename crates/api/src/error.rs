use std::any::Any;
use std::error::Error as _;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookshelf_core::error::BookError;
use bookshelf_core::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`BookError`] and renders it as `{"Code": .., "Message": ..}` with
/// the HTTP status equal to `Code`.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub BookError);

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if let BookError::Internal(_) = &err {
            let cause = err.source().map(ToString::to_string).unwrap_or_default();
            tracing::error!(error = %cause, "Internal error");
        } else {
            tracing::debug!(kind = err.kind(), status = status.as_u16(), "Request rejected");
        }

        (status, Json(err.to_body())).into_response()
    }
}

/// Render a handler panic caught by `CatchPanicLayer` as an internal error,
/// so the client gets the usual `{"Code": 500, ...}` body.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError(BookError::Internal(StoreError::new(format!("handler panicked: {detail}"))))
        .into_response()
}
