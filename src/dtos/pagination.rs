//! Pagination - Normalizzazione delle richieste di lista e metadati pagina

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_ORDER_BY: &str = "created_at";
pub const DEFAULT_SORT_BY: &str = "ASC";

/// Parametri di paginazione e ordinamento di una richiesta di lista
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub sort_by: String,
    pub order_by: String,
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Riempie i default sui campi mancanti. Idempotente: normalizzare una
    /// richiesta già normalizzata non cambia nulla.
    pub fn normalize(&mut self) {
        if self.page < 1 {
            self.page = DEFAULT_PAGE;
        }
        if self.limit <= 0 {
            self.limit = DEFAULT_LIMIT;
        }
        if self.order_by.is_empty() {
            self.order_by = DEFAULT_ORDER_BY.to_string();
        }
        if self.sort_by.is_empty() {
            self.sort_by = DEFAULT_SORT_BY.to_string();
        }
    }

    /// Offset SQL corrispondente alla pagina corrente
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Envelope di una risposta paginata con i metadati di navigazione.
/// `next_page`/`prev_page` valgono 0 quando non esiste la pagina.
#[derive(Serialize, Deserialize, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub next_page: i64,
    pub prev_page: i64,
}

impl<T> Page<T> {
    /// Costruisce la pagina da una copia normalizzata della richiesta.
    /// Zero item → zero pagine.
    pub fn new(request: &PageRequest, total_items: i64, items: Vec<T>) -> Self {
        let mut request = request.clone();
        request.normalize();

        // ceil(total_items / limit) in aritmetica intera
        let total_pages = (total_items + request.limit - 1) / request.limit;

        let next_page = if request.page < total_pages {
            request.page + 1
        } else {
            0
        };

        let prev_page = if request.page > 1 { request.page - 1 } else { 0 };

        Self {
            items,
            current_page: request.page,
            per_page: request.limit,
            total_pages,
            total_items,
            next_page,
            prev_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: i64, limit: i64) -> PageRequest {
        PageRequest {
            sort_by: "ASC".to_string(),
            order_by: "created_at".to_string(),
            page,
            limit,
        }
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let mut req = PageRequest {
            sort_by: String::new(),
            order_by: String::new(),
            page: 0,
            limit: -5,
        };

        req.normalize();

        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 10);
        assert_eq!(req.order_by, "created_at");
        assert_eq!(req.sort_by, "ASC");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut req = request(3, 25);
        req.normalize();
        let snapshot = req.clone();
        req.normalize();
        assert_eq!(req, snapshot);
    }

    #[test]
    fn test_first_page_of_twenty_five_items() {
        let page = Page::new(&request(1, 10), 25, vec![(); 10]);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.next_page, 2);
        assert_eq!(page.prev_page, 0);
    }

    #[test]
    fn test_last_page_of_twenty_five_items() {
        let page = Page::new(&request(3, 10), 25, vec![(); 5]);

        assert_eq!(page.next_page, 0);
        assert_eq!(page.prev_page, 2);
    }

    #[test]
    fn test_zero_items_means_zero_pages() {
        let page = Page::new(&request(1, 10), 0, Vec::<()>::new());

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.next_page, 0);
        assert_eq!(page.prev_page, 0);
    }

    #[test]
    fn test_page_normalizes_a_copy_of_the_request() {
        let raw = PageRequest {
            sort_by: String::new(),
            order_by: String::new(),
            page: 0,
            limit: 0,
        };

        let page = Page::new(&raw, 25, vec![(); 10]);

        assert_eq!(page.current_page, 1);
        assert_eq!(page.per_page, 10);
        // la richiesta del chiamante resta intatta
        assert_eq!(raw.page, 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(request(1, 10).offset(), 0);
        assert_eq!(request(3, 10).offset(), 20);
    }
}
