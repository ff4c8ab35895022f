//! DiskStorage - Adapter filesystem per lo storage delle copertine
//!
//! Gli oggetti vivono in `<root>/<bucket>/<name>`; il "presigned URL" è
//! l'endpoint di download pubblico con in coda un token firmato che
//! scade. Cambiare backend (es. un bucket S3) significa reimplementare
//! [`ObjectStorage`], il resto dell'applicazione non se ne accorge.

use super::{DOWNLOAD_LINK_TTL_MINUTES, ObjectStorage, StorageResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// Claims del token di download: nome dell'oggetto e scadenza
#[derive(Debug, Serialize, Deserialize)]
struct DownloadClaims {
    sub: String,
    exp: usize,
    iat: usize,
}

pub struct DiskStorage {
    root: PathBuf,
    public_url: String,
    signing_secret: String,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>, public_url: String, signing_secret: String) -> Self {
        Self {
            root: root.into(),
            public_url,
            signing_secret,
        }
    }

    fn object_path(&self, bucket: &str, name: &str) -> PathBuf {
        self.root.join(bucket).join(name)
    }

    /// Il nome arriva dal client: via qualsiasi componente di path
    fn sanitize(name: &str) -> Option<&str> {
        let name = Path::new(name).file_name()?.to_str()?;
        if name.is_empty() { None } else { Some(name) }
    }

    /// Nome univoco per l'oggetto caricato, conservando l'estensione
    fn generate_name(original: &str) -> String {
        let ext = Path::new(original)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        format!("book-{}{}", nanos, ext)
    }

    fn sign_token(&self, name: &str) -> Option<String> {
        let now = Utc::now();
        let claims = DownloadClaims {
            sub: name.to_string(),
            exp: (now + Duration::minutes(DOWNLOAD_LINK_TTL_MINUTES)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.signing_secret.as_ref()),
        )
        .map_err(|e| error!("failed to sign download token: {:?}", e))
        .ok()
    }

    /// Verifica che il token sia integro, non scaduto e riferito proprio
    /// a `name`.
    pub fn verify_token(&self, token: &str, name: &str) -> bool {
        let decoded = decode::<DownloadClaims>(
            token,
            &DecodingKey::from_secret(self.signing_secret.as_ref()),
            &Validation::default(),
        );

        match decoded {
            Ok(data) => data.claims.sub == name,
            Err(_) => false,
        }
    }

    /// Legge i byte di un oggetto (per l'endpoint di download)
    pub async fn read(&self, bucket: &str, name: &str) -> Result<Vec<u8>, std::io::Error> {
        let name = Self::sanitize(name).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid object name")
        })?;
        tokio::fs::read(self.object_path(bucket, name)).await
    }
}

impl ObjectStorage for DiskStorage {
    async fn upload(
        &self,
        bucket: &str,
        name: &str,
        data: &[u8],
    ) -> Result<StorageResponse, std::io::Error> {
        let original = Self::sanitize(name).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid object name")
        })?;

        let file_name = Self::generate_name(original);
        let dir = self.root.join(bucket);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), data).await?;

        Ok(StorageResponse {
            file_name,
            link: None,
        })
    }

    async fn download(&self, bucket: &str, name: &str) -> Option<StorageResponse> {
        if name.is_empty() {
            return None;
        }

        let name = Self::sanitize(name)?;
        if !self.object_path(bucket, name).is_file() {
            warn!("object {}/{} not found in storage", bucket, name);
            return None;
        }

        let token = self.sign_token(name)?;
        let link = format!("{}/storage/{}?token={}", self.public_url, name, token);

        Some(StorageResponse {
            file_name: name.to_string(),
            link: Some(link),
        })
    }

    async fn delete(&self, bucket: &str, name: &str) -> Result<(), std::io::Error> {
        let name = Self::sanitize(name).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid object name")
        })?;
        tokio::fs::remove_file(self.object_path(bucket, name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(root: &Path) -> DiskStorage {
        DiskStorage::new(
            root,
            "http://localhost:3000".to_string(),
            "storage-secret".to_string(),
        )
    }

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("biblioteca-storage-{}-{}", tag, std::process::id()))
    }

    #[tokio::test]
    async fn test_upload_then_download_and_delete() {
        let root = temp_root("roundtrip");
        let storage = storage(&root);

        let uploaded = storage
            .upload("covers", "rosa.jpg", b"fake jpeg bytes")
            .await
            .unwrap();
        assert!(uploaded.file_name.starts_with("book-"));
        assert!(uploaded.file_name.ends_with(".jpg"));

        let download = storage.download("covers", &uploaded.file_name).await.unwrap();
        let link = download.link.unwrap();
        assert!(link.contains(&format!("/storage/{}", uploaded.file_name)));
        assert!(link.contains("token="));

        let bytes = storage.read("covers", &uploaded.file_name).await.unwrap();
        assert_eq!(bytes, b"fake jpeg bytes");

        storage.delete("covers", &uploaded.file_name).await.unwrap();
        assert!(storage.download("covers", &uploaded.file_name).await.is_none());

        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn test_download_with_empty_name_is_none() {
        let root = temp_root("empty");
        let storage = storage(&root);

        assert!(storage.download("covers", "").await.is_none());
    }

    #[tokio::test]
    async fn test_token_is_bound_to_object_name() {
        let root = temp_root("token");
        let storage = storage(&root);

        let token = storage.sign_token("book-1.jpg").unwrap();
        assert!(storage.verify_token(&token, "book-1.jpg"));
        assert!(!storage.verify_token(&token, "book-2.jpg"));
        assert!(!storage.verify_token("garbage", "book-1.jpg"));
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(DiskStorage::sanitize("../../etc/passwd"), Some("passwd"));
        assert_eq!(DiskStorage::sanitize("cover.png"), Some("cover.png"));
        assert_eq!(DiskStorage::sanitize(""), None);
    }
}
