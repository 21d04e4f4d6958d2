//! Business rules for create and update payloads.
//!
//! The checks run in a fixed order and stop at the first failure; clients
//! depend on receiving that first error.

use validator::{Validate, ValidationErrors};

use crate::book::{BookStatus, BookUpdate, NewBook};
use crate::error::{BookError, BookResult};
use crate::request::{CreateBook, UpdateBook};

/// Validate a create payload, defaulting an empty status to `CheckedIn`.
///
/// Order: object present, title and author present, status recognised,
/// rating in range.
pub fn validate_create(input: Option<CreateBook>) -> BookResult<NewBook> {
    let input = input.ok_or(BookError::ObjectRequired)?;
    let failures = input.validate().err();

    if has_field_error(&failures, "title") || has_field_error(&failures, "author") {
        return Err(BookError::TitleAndAuthorRequired);
    }

    let status = if input.status.is_empty() {
        BookStatus::CheckedIn
    } else {
        BookStatus::parse(&input.status).ok_or(BookError::StatusInvalid)?
    };

    if has_field_error(&failures, "rating") {
        return Err(BookError::RatingInvalid);
    }

    Ok(NewBook {
        title: input.title,
        author: input.author,
        publisher: input.publisher,
        publish_date: input.publish_date,
        status,
        rating: input.rating,
    })
}

/// Validate an update payload.
///
/// An empty status means "keep the current one" and is not defaulted.
/// Rating bounds and title/author presence are not checked here, so an
/// update may clear those fields or store an out-of-range rating.
pub fn validate_update(input: Option<UpdateBook>) -> BookResult<BookUpdate> {
    let input = input.ok_or(BookError::ObjectRequired)?;

    if input.id.is_empty() {
        return Err(BookError::ValidIdRequired);
    }

    let status = if input.status.is_empty() {
        None
    } else {
        Some(BookStatus::parse(&input.status).ok_or(BookError::StatusInvalid)?)
    };

    Ok(BookUpdate {
        id: input.id,
        title: input.title,
        author: input.author,
        publisher: input.publisher,
        publish_date: input.publish_date,
        status,
        rating: input.rating,
    })
}

fn has_field_error(failures: &Option<ValidationErrors>, field: &str) -> bool {
    failures
        .as_ref()
        .is_some_and(|errors| errors.field_errors().contains_key(field))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn create(title: &str, author: &str, status: &str, rating: i32) -> Option<CreateBook> {
        Some(CreateBook {
            title: title.into(),
            author: author.into(),
            publisher: "P".into(),
            publish_date: String::new(),
            status: status.into(),
            rating,
        })
    }

    fn update(id: &str, status: &str, rating: i32) -> Option<UpdateBook> {
        Some(UpdateBook {
            id: id.into(),
            status: status.into(),
            rating,
            ..UpdateBook::default()
        })
    }

    // -- create --

    #[test]
    fn create_requires_object() {
        assert_matches!(validate_create(None), Err(BookError::ObjectRequired));
    }

    #[test]
    fn create_requires_title_and_author() {
        assert_matches!(
            validate_create(create("", "A", "", 1)),
            Err(BookError::TitleAndAuthorRequired)
        );
        assert_matches!(
            validate_create(create("T", "", "", 1)),
            Err(BookError::TitleAndAuthorRequired)
        );
    }

    #[test]
    fn create_defaults_empty_status() {
        let book = validate_create(create("T", "A", "", 2)).unwrap();
        assert_eq!(book.status, BookStatus::CheckedIn);
        assert_eq!(book.rating, 2);
    }

    #[test]
    fn create_keeps_explicit_status() {
        let book = validate_create(create("T", "A", "CheckedOut", 3)).unwrap();
        assert_eq!(book.status, BookStatus::CheckedOut);
    }

    #[test]
    fn create_rejects_unknown_status() {
        assert_matches!(
            validate_create(create("T", "A", "garbage", 1)),
            Err(BookError::StatusInvalid)
        );
    }

    #[test]
    fn create_rejects_out_of_range_rating() {
        for rating in [0, 4, -1, 100] {
            assert_matches!(
                validate_create(create("T", "A", "", rating)),
                Err(BookError::RatingInvalid)
            );
        }
    }

    #[test]
    fn title_check_runs_before_status_and_rating() {
        assert_matches!(
            validate_create(create("", "", "garbage", 9)),
            Err(BookError::TitleAndAuthorRequired)
        );
    }

    #[test]
    fn status_check_runs_before_rating() {
        assert_matches!(
            validate_create(create("T", "A", "garbage", 9)),
            Err(BookError::StatusInvalid)
        );
    }

    // -- update --

    #[test]
    fn update_requires_object_then_id() {
        assert_matches!(validate_update(None), Err(BookError::ObjectRequired));
        assert_matches!(
            validate_update(update("", "garbage", 1)),
            Err(BookError::ValidIdRequired)
        );
    }

    #[test]
    fn update_rejects_unknown_status() {
        assert_matches!(
            validate_update(update("b1", "Lost", 1)),
            Err(BookError::StatusInvalid)
        );
    }

    #[test]
    fn update_treats_empty_status_as_unchanged() {
        let upd = validate_update(update("b1", "", 1)).unwrap();
        assert_eq!(upd.status, None);
    }

    #[test]
    fn update_does_not_check_rating_or_title() {
        let upd = validate_update(update("b1", "CheckedOut", 7)).unwrap();
        assert_eq!(upd.rating, 7);
        assert_eq!(upd.title, "");
        assert_eq!(upd.status, Some(BookStatus::CheckedOut));
    }
}
