//! The closed set of errors a client can receive.
//!
//! Every failure surfaced by the service maps to exactly one [`BookError`]
//! variant. Each variant carries a fixed HTTP status code and a fixed
//! message; nothing is interpolated into the message, so backend details
//! never reach the wire.

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

const MSG_OBJECT_REQUIRED: &str = "Request object should be provided";
const MSG_TITLE_AND_AUTHOR_REQUIRED: &str = "A title and author are required";
const MSG_STATUS_INVALID: &str = "Please provide a Status of CheckedIn or CheckedOut";
const MSG_RATING_INVALID: &str = "Rating must be 1-3";
const MSG_VALID_ID_REQUIRED: &str = "A valid book id is required";
const MSG_BOOK_NOT_FOUND: &str = "Book not found";
const MSG_UNPROCESSABLE_INPUT: &str = "Unprocessable Entity";
const MSG_INVALID_LIMIT: &str = "Limit should be an integral value";
const MSG_INTERNAL: &str = "Something went wrong";

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// The request carried no body or object at all.
    #[error("{}", MSG_OBJECT_REQUIRED)]
    ObjectRequired,

    #[error("{}", MSG_TITLE_AND_AUTHOR_REQUIRED)]
    TitleAndAuthorRequired,

    /// A non-empty status that is neither `CheckedIn` nor `CheckedOut`.
    #[error("{}", MSG_STATUS_INVALID)]
    StatusInvalid,

    #[error("{}", MSG_RATING_INVALID)]
    RatingInvalid,

    #[error("{}", MSG_VALID_ID_REQUIRED)]
    ValidIdRequired,

    #[error("{}", MSG_BOOK_NOT_FOUND)]
    BookNotFound,

    /// The body was present but could not be decoded.
    #[error("{}", MSG_UNPROCESSABLE_INPUT)]
    UnprocessableInput,

    #[error("{}", MSG_INVALID_LIMIT)]
    InvalidLimit,

    /// Any unclassified store failure. The source is kept for logging only.
    #[error("{}", MSG_INTERNAL)]
    Internal(#[from] StoreError),
}

impl BookError {
    /// HTTP status code associated with this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ObjectRequired
            | Self::TitleAndAuthorRequired
            | Self::StatusInvalid
            | Self::RatingInvalid
            | Self::ValidIdRequired
            | Self::InvalidLimit => 400,
            Self::BookNotFound => 404,
            Self::UnprocessableInput => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Fixed, client-safe message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ObjectRequired => MSG_OBJECT_REQUIRED,
            Self::TitleAndAuthorRequired => MSG_TITLE_AND_AUTHOR_REQUIRED,
            Self::StatusInvalid => MSG_STATUS_INVALID,
            Self::RatingInvalid => MSG_RATING_INVALID,
            Self::ValidIdRequired => MSG_VALID_ID_REQUIRED,
            Self::BookNotFound => MSG_BOOK_NOT_FOUND,
            Self::UnprocessableInput => MSG_UNPROCESSABLE_INPUT,
            Self::InvalidLimit => MSG_INVALID_LIMIT,
            Self::Internal(_) => MSG_INTERNAL,
        }
    }

    /// Stable name of the error kind, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ObjectRequired => "ObjectRequired",
            Self::TitleAndAuthorRequired => "TitleAndAuthorRequired",
            Self::StatusInvalid => "StatusInvalid",
            Self::RatingInvalid => "RatingInvalid",
            Self::ValidIdRequired => "ValidIdRequired",
            Self::BookNotFound => "BookNotFound",
            Self::UnprocessableInput => "UnprocessableInput",
            Self::InvalidLimit => "InvalidLimit",
            Self::Internal(_) => "Internal",
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.status_code(),
            message: self.message().to_string(),
        }
    }
}

/// Convenience alias for service return values.
pub type BookResult<T> = Result<T, BookError>;

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

/// Error body written to the wire: `{"Code": 404, "Message": "Book not found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Code")]
    pub code: u16,
    #[serde(rename = "Message")]
    pub message: String,
}
