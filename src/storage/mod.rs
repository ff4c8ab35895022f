//! Storage module - Porta verso lo storage degli oggetti (copertine)
//!
//! Il contratto è quello di un object storage con link firmati a scadenza;
//! l'implementazione di default scrive su filesystem locale e firma i link
//! di download con un token JWT a vita breve.

pub mod disk;

pub use disk::DiskStorage;

use serde::{Deserialize, Serialize};

/// Durata dei link di download, in minuti
pub const DOWNLOAD_LINK_TTL_MINUTES: i64 = 30;

/// Risultato di upload/download: nome dell'oggetto e, per i download, il
/// link firmato a cui scaricarlo.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StorageResponse {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Contratto dello storage oggetti.
pub trait ObjectStorage {
    /// Salva `data` nel bucket con un nome generato a partire da `name`
    /// (ne conserva solo l'estensione). Ritorna il nome assegnato.
    async fn upload(
        &self,
        bucket: &str,
        name: &str,
        data: &[u8],
    ) -> Result<StorageResponse, std::io::Error>;

    /// Produce un link firmato valido [`DOWNLOAD_LINK_TTL_MINUTES`] minuti.
    /// `None` con nome vuoto o oggetto inesistente.
    async fn download(&self, bucket: &str, name: &str) -> Option<StorageResponse>;

    /// Rimuove un oggetto dal bucket.
    async fn delete(&self, bucket: &str, name: &str) -> Result<(), std::io::Error>;
}
