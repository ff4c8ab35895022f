//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione
//! client-server. I DTOs separano la rappresentazione esterna (API) dalla
//! rappresentazione interna (entities).

pub mod auth;
pub mod author;
pub mod book;
pub mod category;
pub mod filter;
pub mod pagination;
pub mod publisher;
pub mod query;
pub mod user;

// Re-exports per facilitare l'import
pub use auth::{CurrentUserDTO, LoginDTO, RegisterDTO, TokenDTO};
pub use author::{AuthorDTO, CreateAuthorDTO, UpdateAuthorDTO};
pub use book::{BookDTO, CreateBookDTO, UpdateBookDTO};
pub use category::{CategoryDTO, CreateCategoryDTO, UpdateCategoryDTO};
pub use filter::{BookFilter, SearchFilter};
pub use pagination::{Page, PageRequest};
pub use publisher::{CreatePublisherDTO, PublisherDTO, UpdatePublisherDTO};
pub use query::{BookListQuery, ListQuery};
pub use user::{CreateUserDTO, UpdateUserDTO, UserDTO};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidateEmail, ValidationError};

lazy_static! {
    static ref CALENDAR_DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Data di calendario `YYYY-MM-DD`; la stringa vuota è ammessa (campo
/// omesso).
pub fn validate_calendar_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    let well_formed = CALENDAR_DATE_RE.is_match(value)
        && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();

    if !well_formed {
        let mut err = ValidationError::new("calendar_date");
        err.message = Some(Cow::Borrowed("must be a YYYY-MM-DD calendar date"));
        return Err(err);
    }
    Ok(())
}

/// Email valida oppure stringa vuota (campo omesso)
pub fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        return Ok(());
    }

    let mut err = ValidationError::new("email");
    err.message = Some(Cow::Borrowed("must be a valid email address"));
    Err(err)
}

/// Ogni id di categoria deve essere positivo; lista vuota ammessa
pub fn validate_category_ids(ids: &Vec<i32>) -> Result<(), ValidationError> {
    if ids.iter().all(|id| *id >= 1) {
        return Ok(());
    }

    let mut err = ValidationError::new("category_ids");
    err.message = Some(Cow::Borrowed("category ids must be positive"));
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_rule() {
        assert!(validate_calendar_date("").is_ok());
        assert!(validate_calendar_date("1980-10-01").is_ok());
        assert!(validate_calendar_date("1980-13-01").is_err());
        assert!(validate_calendar_date("01-10-1980").is_err());
        assert!(validate_calendar_date("yesterday").is_err());
    }

    #[test]
    fn test_optional_email_rule() {
        assert!(validate_optional_email("").is_ok());
        assert!(validate_optional_email("a@b.com").is_ok());
        assert!(validate_optional_email("not-an-email").is_err());
    }

    #[test]
    fn test_category_ids_rule() {
        assert!(validate_category_ids(&vec![]).is_ok());
        assert!(validate_category_ids(&vec![1, 2]).is_ok());
        assert!(validate_category_ids(&vec![1, 0]).is_err());
    }
}
