//! Query DTOs - Data Transfer Objects per i query parameters delle liste
//!
//! I parametri arrivano piatti sulla query string e vengono spacchettati
//! in `PageRequest` + filtro prima di toccare il repository.

use crate::dtos::filter::{BookFilter, SearchFilter};
use crate::dtos::pagination::PageRequest;
use serde::{Deserialize, Serialize};

/// Query parameters comuni a tutte le liste
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub sort_by: String,
    #[serde(default)]
    pub order_by: String,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl ListQuery {
    pub fn pagination(&self) -> PageRequest {
        PageRequest {
            sort_by: self.sort_by.clone(),
            order_by: self.order_by.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn filter(&self) -> SearchFilter {
        SearchFilter {
            search: self.search.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

/// Query parameters delle liste libri: gli stessi di [`ListQuery`] più
/// categorie (lista di id separati da virgola) e finestra di pubblicazione.
///
/// Niente `serde(flatten)`: la deserializzazione da query string non lo
/// regge sui campi numerici.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct BookListQuery {
    #[serde(default)]
    pub sort_by: String,
    #[serde(default)]
    pub order_by: String,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub categories: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl BookListQuery {
    pub fn pagination(&self) -> PageRequest {
        PageRequest {
            sort_by: self.sort_by.clone(),
            order_by: self.order_by.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn filter(&self) -> BookFilter {
        BookFilter {
            base: SearchFilter {
                search: self.search.clone(),
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
            },
            categories: parse_id_list(&self.categories),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

/// "1, 2,x,3" → [1, 2, 3]; le parti non numeriche vengono ignorate
fn parse_id_list(raw: &str) -> Vec<i32> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse::<i32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list_skips_garbage() {
        assert_eq!(parse_id_list("1, 2,x,3,"), vec![1, 2, 3]);
        assert_eq!(parse_id_list(""), Vec::<i32>::new());
    }

    #[test]
    fn test_book_query_splits_into_pagination_and_filter() {
        let query = BookListQuery {
            sort_by: "DESC".to_string(),
            order_by: "title".to_string(),
            page: 2,
            limit: 5,
            search: "eco".to_string(),
            categories: "1,2".to_string(),
            from: "1950-01-01".to_string(),
            ..Default::default()
        };

        let pagination = query.pagination();
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.order_by, "title");

        let filter = query.filter();
        assert_eq!(filter.base.search, "eco");
        assert_eq!(filter.categories, vec![1, 2]);
        assert_eq!(filter.from, "1950-01-01");
    }
}
