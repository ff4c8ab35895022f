//! Book entity - Entità libro
//!
//! Le categorie associate vivono nella tabella ponte `book_categories` e
//! vengono caricate a parte dal repository; qui c'è solo la riga del libro.

use crate::core::differ::{Differ, merged};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// Nome dell'oggetto nello storage, non un URL
    pub cover: String,
    pub description: String,
    pub page_count: i32,
    pub author_id: i32,
    pub publisher_id: i32,
    pub publication_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Differ for Book {
    fn merge_from(&self, patch: &Self) -> Self {
        Self {
            id: self.id,
            title: merged(&self.title, &patch.title),
            cover: merged(&self.cover, &patch.cover),
            description: merged(&self.description, &patch.description),
            page_count: merged(&self.page_count, &patch.page_count),
            author_id: merged(&self.author_id, &patch.author_id),
            publisher_id: merged(&self.publisher_id, &patch.publisher_id),
            publication_date: merged(&self.publication_date, &patch.publication_date),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_book() -> Book {
        Book {
            id: 7,
            title: "IL NOME DELLA ROSA".to_string(),
            cover: "book-123.jpg".to_string(),
            description: "A monastery murder mystery".to_string(),
            page_count: 512,
            author_id: 3,
            publisher_id: 2,
            publication_date: NaiveDate::from_ymd_opt(1980, 10, 1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_partial_patch_touches_only_sent_fields() {
        let old = stored_book();
        let patch = Book {
            id: 7,
            title: String::new(),
            cover: String::new(),
            description: String::new(),
            page_count: 600,
            author_id: 0,
            publisher_id: 2,
            publication_date: NaiveDate::default(),
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
        };

        let result = old.merge_from(&patch);

        assert_eq!(result.title, "IL NOME DELLA ROSA");
        assert_eq!(result.cover, "book-123.jpg");
        assert_eq!(result.page_count, 600);
        assert_eq!(result.author_id, 3);
        assert_eq!(result.publication_date, old.publication_date);
    }
}
