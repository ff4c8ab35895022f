//! Filter - Filtri di ricerca per le liste, con default temporali
//!
//! I default vengono applicati solo ai campi ancora vuoti, quindi
//! richiamare `apply_defaults` più volte è innocuo.

use crate::dtos::validate_calendar_date;
use chrono::{Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filtro comune a tutte le liste: testo di ricerca e finestra sulla
/// data di creazione del record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct SearchFilter {
    #[validate(length(max = 100, message = "Search text is too long"))]
    pub search: String,
    #[validate(custom(function = "validate_calendar_date"))]
    pub start_date: String,
    #[validate(custom(function = "validate_calendar_date"))]
    pub end_date: String,
}

impl SearchFilter {
    /// Finestra di default: da 10 anni fa a dopodomani
    pub fn apply_defaults(&mut self) {
        let now = Utc::now();

        if self.start_date.is_empty() {
            let start = now - Months::new(12 * 10);
            self.start_date = start.format(DATE_FORMAT).to_string();
        }
        if self.end_date.is_empty() {
            let end = now + Duration::days(2);
            self.end_date = end.format(DATE_FORMAT).to_string();
        }
    }
}

/// Filtro delle liste libri: aggiunge la finestra sulla data di
/// pubblicazione e il vincolo sulle categorie.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct BookFilter {
    pub base: SearchFilter,
    pub categories: Vec<i32>,
    #[validate(custom(function = "validate_calendar_date"))]
    pub from: String,
    #[validate(custom(function = "validate_calendar_date"))]
    pub to: String,
}

impl BookFilter {
    /// Default del filtro base, più finestra di pubblicazione da 100 anni
    /// fa ad oggi
    pub fn apply_defaults(&mut self) {
        self.base.apply_defaults();
        let now = Utc::now();

        if self.from.is_empty() {
            let from = now - Months::new(12 * 100);
            self.from = from.format(DATE_FORMAT).to_string();
        }
        if self.to.is_empty() {
            self.to = now.format(DATE_FORMAT).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn year_of(date: &str) -> i32 {
        NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap().year()
    }

    #[test]
    fn test_defaults_fill_empty_dates() {
        let mut filter = SearchFilter::default();
        filter.apply_defaults();

        let this_year = Utc::now().year();
        assert_eq!(year_of(&filter.start_date), this_year - 10);
        // +2 giorni: può scavalcare il capodanno
        assert!(year_of(&filter.end_date) >= this_year);
        assert!(filter.search.is_empty());
    }

    #[test]
    fn test_defaults_leave_provided_dates_alone() {
        let mut filter = SearchFilter {
            search: String::new(),
            start_date: "2020-01-01".to_string(),
            end_date: String::new(),
        };

        filter.apply_defaults();

        assert_eq!(filter.start_date, "2020-01-01");
        assert!(!filter.end_date.is_empty());
    }

    #[test]
    fn test_second_application_only_fills_still_empty_fields() {
        let mut filter = SearchFilter::default();
        filter.apply_defaults();

        // modifica manuale tra le due applicazioni
        filter.start_date = "1999-12-31".to_string();
        filter.end_date.clear();
        filter.apply_defaults();

        assert_eq!(filter.start_date, "1999-12-31");
        assert!(!filter.end_date.is_empty());
    }

    #[test]
    fn test_book_filter_windows() {
        let mut filter = BookFilter::default();
        filter.apply_defaults();

        let this_year = Utc::now().year();
        assert_eq!(year_of(&filter.from), this_year - 100);
        assert_eq!(year_of(&filter.to), this_year);
        assert_eq!(year_of(&filter.base.start_date), this_year - 10);
    }

    #[test]
    fn test_validation_rejects_malformed_dates() {
        let filter = SearchFilter {
            search: String::new(),
            start_date: "not-a-date".to_string(),
            end_date: String::new(),
        };

        assert!(filter.validate().is_err());
    }
}
