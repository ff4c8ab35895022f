//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository, l'adapter di storage e la configurazione
//! condivisa necessaria a route e middleware.

use crate::repositories::{
    AuthorRepository, BookRepository, CategoryRepository, PublisherRepository, UserRepository,
};
use crate::storage::DiskStorage;
use sqlx::PgPool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione degli autori
    pub author: AuthorRepository,

    /// Repository per la gestione degli editori
    pub publisher: PublisherRepository,

    /// Repository per la gestione delle categorie
    pub category: CategoryRepository,

    /// Repository per la gestione dei libri
    pub book: BookRepository,

    /// Adapter per lo storage delle copertine
    pub storage: DiskStorage,

    /// Bucket (directory) dove vivono le copertine
    pub bucket: String,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    pub fn new(pool: PgPool, jwt_secret: String, bucket: String, storage: DiskStorage) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            author: AuthorRepository::new(pool.clone()),
            publisher: PublisherRepository::new(pool.clone()),
            category: CategoryRepository::new(pool.clone()),
            book: BookRepository::new(pool),
            storage,
            bucket,
            jwt_secret,
        }
    }
}
