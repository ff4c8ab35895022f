//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica
//! entità. Le query sono costruite a runtime: le liste portano ORDER BY
//! dinamico e filtri composti, che le macro compile-time di sqlx non
//! possono esprimere. Le colonne di ordinamento passano da una whitelist,
//! mai dall'input dell'utente direttamente.

use crate::dtos::PageRequest;

pub mod author;
pub mod book;
pub mod category;
pub mod publisher;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use author::AuthorRepository;
pub use book::BookRepository;
pub use category::CategoryRepository;
pub use publisher::PublisherRepository;
pub use user::UserRepository;

/// Clausola ORDER BY sicura: colonna presa dalla whitelist (fallback
/// `created_at`), direzione solo ASC/DESC.
pub(crate) fn order_clause(page: &PageRequest, allowed: &[&str]) -> String {
    let column = allowed
        .iter()
        .find(|candidate| **candidate == page.order_by)
        .copied()
        .unwrap_or("created_at");

    let direction = if page.sort_by.eq_ignore_ascii_case("DESC") {
        "DESC"
    } else {
        "ASC"
    };

    format!("{} {}", column, direction)
}
