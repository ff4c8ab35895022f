//! Storage services - Upload delle copertine e download via link firmato

use crate::core::{AppError, AppState, ok};
use crate::storage::ObjectStorage;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Query string del download: il token firmato emesso con il link
#[derive(Deserialize, Debug)]
pub struct DownloadQuery {
    #[serde(default)]
    pub token: String,
}

/// Upload multipart: il form deve contenere un campo `file`
#[instrument(skip(state, multipart))]
pub async fn upload_object(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.bin").to_string();
        let data = field.bytes().await?;

        let uploaded = state
            .storage
            .upload(&state.bucket, &file_name, &data)
            .await?;

        info!("Uploaded object {}", uploaded.file_name);
        return Ok(ok(uploaded, "Upload successful"));
    }

    warn!("Multipart body without a file field");
    Err(AppError::bad_request("Missing file field"))
}

/// Download pubblico: pretende il token firmato e non scaduto emesso
/// insieme al link.
#[instrument(skip(state, query), fields(name = %name))]
pub async fn serve_object(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !state.storage.verify_token(&query.token, &name) {
        warn!("Invalid or expired download token");
        return Err(AppError::unauthorized("Invalid or expired link"));
    }

    let bytes = state
        .storage
        .read(&state.bucket, &name)
        .await
        .map_err(|_| AppError::not_found("File not found"))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream"),
            (header::CONTENT_DISPOSITION, "inline"),
        ],
        bytes,
    ))
}
