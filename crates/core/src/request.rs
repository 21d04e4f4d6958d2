//! Request translator: raw query strings and JSON bodies into typed requests.
//!
//! Structural problems (undecodable bodies, non-integer limits, missing
//! identifiers) are rejected here, before any business rule runs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::book::{MAX_RATING, MIN_RATING};
use crate::error::{BookError, BookResult};
use crate::types::BookId;

// ---------------------------------------------------------------------------
// Listing limits
// ---------------------------------------------------------------------------

/// Maximum number of books a single list call returns.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Parse the raw `limit` query value. Absent means 0 (use the cap).
pub fn parse_limit(raw: Option<&str>) -> BookResult<i64> {
    match raw {
        None => Ok(0),
        Some(s) => match s.parse::<i64>() {
            Ok(n) if n >= 0 => Ok(n),
            _ => Err(BookError::InvalidLimit),
        },
    }
}

/// Clamp a parsed limit: zero or anything above the cap becomes the cap.
pub fn resolve_limit(limit: i64) -> i64 {
    if limit == 0 || limit > MAX_LIST_LIMIT {
        MAX_LIST_LIMIT
    } else {
        limit
    }
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// Query parameters as they arrive on the URL. Every value is optional and
/// kept as a string so the translator decides what is malformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuery {
    pub id: Option<String>,
    pub title: Option<String>,
    pub limit: Option<String>,
}

impl RawQuery {
    pub fn id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn limit(&self) -> Option<&str> {
        non_empty(self.limit.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Decode a JSON body.
///
/// Returns `Ok(None)` when there is no object at all (empty body or a bare
/// `null`), leaving the "object required" decision to validation.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> BookResult<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected undecodable request body");
        BookError::UnprocessableInput
    })
}

// ---------------------------------------------------------------------------
// Payload DTOs
// ---------------------------------------------------------------------------

/// Read a JSON `null` as the field's default, the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON payload for creating a book.
///
/// Client-supplied `id`, `createdOn` and `updatedOn` are ignored. Missing
/// and `null` fields both read as empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(alias = "publishdate", deserialize_with = "null_as_default")]
    pub publish_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[validate(range(min = MIN_RATING, max = MAX_RATING))]
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i32,
}

/// JSON payload for `PUT /books/update`. Every listed field is written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateBook {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(alias = "publishdate", deserialize_with = "null_as_default")]
    pub publish_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i32,
}

// ---------------------------------------------------------------------------
// Typed requests
// ---------------------------------------------------------------------------

/// How a single book is located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookLookup {
    Id(BookId),
    /// Exact title match; the lowest id wins when several books share it.
    Title(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    pub lookup: BookLookup,
}

impl GetRequest {
    /// `id` takes precedence over `title`; neither present is an error.
    pub fn from_query(query: &RawQuery) -> BookResult<Self> {
        let lookup = match (query.id(), query.title()) {
            (Some(id), _) => BookLookup::Id(id.to_string()),
            (None, Some(title)) => BookLookup::Title(title.to_string()),
            (None, None) => return Err(BookError::ValidIdRequired),
        };
        Ok(Self { lookup })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    /// Case-insensitive substring filter on the title.
    pub title: Option<String>,
    /// Already clamped to `1..=MAX_LIST_LIMIT`.
    pub limit: i64,
}

impl ListRequest {
    pub fn from_query(query: &RawQuery) -> BookResult<Self> {
        let limit = resolve_limit(parse_limit(query.limit())?);
        Ok(Self {
            title: query.title().map(str::to_string),
            limit,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub book: Option<CreateBook>,
}

impl CreateRequest {
    pub fn from_body(body: &[u8]) -> BookResult<Self> {
        Ok(Self {
            book: decode_body(body)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDetailsRequest {
    pub update: Option<UpdateBook>,
}

impl UpdateDetailsRequest {
    pub fn from_body(body: &[u8]) -> BookResult<Self> {
        Ok(Self {
            update: decode_body(body)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: BookId,
}

impl DeleteRequest {
    pub fn from_query(query: &RawQuery) -> BookResult<Self> {
        let id = query.id().ok_or(BookError::ValidIdRequired)?;
        Ok(Self { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn query(id: Option<&str>, title: Option<&str>, limit: Option<&str>) -> RawQuery {
        RawQuery {
            id: id.map(Into::into),
            title: title.map(Into::into),
            limit: limit.map(Into::into),
        }
    }

    // -- limit --

    #[test]
    fn missing_limit_resolves_to_cap() {
        let req = ListRequest::from_query(&RawQuery::default()).unwrap();
        assert_eq!(req.limit, MAX_LIST_LIMIT);
        assert_eq!(req.title, None);
    }

    #[test]
    fn zero_and_oversized_limits_clamp_to_cap() {
        assert_eq!(resolve_limit(0), MAX_LIST_LIMIT);
        assert_eq!(resolve_limit(201), MAX_LIST_LIMIT);
        assert_eq!(resolve_limit(200), 200);
        assert_eq!(resolve_limit(2), 2);
    }

    #[test]
    fn non_numeric_limit_is_rejected() {
        assert_matches!(
            ListRequest::from_query(&query(None, None, Some("ten"))),
            Err(BookError::InvalidLimit)
        );
        assert_matches!(parse_limit(Some("1.5")), Err(BookError::InvalidLimit));
    }

    #[test]
    fn negative_limit_is_rejected() {
        assert_matches!(parse_limit(Some("-3")), Err(BookError::InvalidLimit));
    }

    #[test]
    fn empty_limit_counts_as_absent() {
        let req = ListRequest::from_query(&query(None, Some("rust"), Some(""))).unwrap();
        assert_eq!(req.limit, MAX_LIST_LIMIT);
        assert_eq!(req.title.as_deref(), Some("rust"));
    }

    // -- get / delete --

    #[test]
    fn get_without_id_or_title_requires_id() {
        assert_matches!(
            GetRequest::from_query(&query(Some(""), None, None)),
            Err(BookError::ValidIdRequired)
        );
    }

    #[test]
    fn get_prefers_id_over_title() {
        let req = GetRequest::from_query(&query(Some("abc"), Some("Dune"), None)).unwrap();
        assert_eq!(req.lookup, BookLookup::Id("abc".into()));
    }

    #[test]
    fn get_falls_back_to_title() {
        let req = GetRequest::from_query(&query(None, Some("Dune"), None)).unwrap();
        assert_eq!(req.lookup, BookLookup::Title("Dune".into()));
    }

    #[test]
    fn delete_requires_id() {
        assert_matches!(
            DeleteRequest::from_query(&query(None, Some("Dune"), None)),
            Err(BookError::ValidIdRequired)
        );
    }

    // -- bodies --

    #[test]
    fn empty_body_has_no_object() {
        let req = CreateRequest::from_body(b"").unwrap();
        assert!(req.book.is_none());
        let req = UpdateDetailsRequest::from_body(b"  \n").unwrap();
        assert!(req.update.is_none());
    }

    #[test]
    fn null_body_has_no_object() {
        let req = CreateRequest::from_body(b"null").unwrap();
        assert!(req.book.is_none());
    }

    #[test]
    fn malformed_body_is_unprocessable() {
        assert_matches!(
            CreateRequest::from_body(b"{\"title\":"),
            Err(BookError::UnprocessableInput)
        );
        assert_matches!(
            CreateRequest::from_body(br#"{"rating":"three"}"#),
            Err(BookError::UnprocessableInput)
        );
    }

    #[test]
    fn create_body_fills_missing_fields_with_defaults() {
        let req = CreateRequest::from_body(br#"{"title":"T","author":"A","rating":1}"#).unwrap();
        let book = req.book.unwrap();
        assert_eq!(book.title, "T");
        assert_eq!(book.publisher, "");
        assert_eq!(book.status, "");
    }

    #[test]
    fn null_fields_read_as_empty() {
        let req = CreateRequest::from_body(
            br#"{"title":"T","author":"A","status":null,"publisher":null,"rating":1}"#,
        )
        .unwrap();
        let book = req.book.unwrap();
        assert_eq!(book.status, "");
        assert_eq!(book.publisher, "");
        assert_eq!(book.rating, 1);

        let req = UpdateDetailsRequest::from_body(br#"{"id":"x","rating":null,"title":null}"#)
            .unwrap();
        let update = req.update.unwrap();
        assert_eq!(update.rating, 0);
        assert_eq!(update.title, "");
    }

    #[test]
    fn update_body_accepts_lowercase_publishdate() {
        let req =
            UpdateDetailsRequest::from_body(br#"{"id":"x","publishdate":"2001"}"#).unwrap();
        assert_eq!(req.update.unwrap().publish_date, "2001");
    }
}
