//! Author services - CRUD autori

use crate::core::differ::Differ;
use crate::core::response::created;
use crate::core::{AppError, AppState, ok};
use crate::dtos::{AuthorDTO, CreateAuthorDTO, ListQuery, Page, UpdateAuthorDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body))]
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateAuthorDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let author = state.author.create(&body.to_entity()).await?;
    info!("Created author {}", author.id);
    Ok(created(
        AuthorDTO::from(author),
        "Author created successfully",
    ))
}

#[instrument(skip(state, query))]
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut page_request = query.pagination();
    page_request.normalize();
    let mut filter = query.filter();
    filter.apply_defaults();
    filter.validate()?;

    let (authors, count) = state.author.find_all(&page_request, &filter).await?;
    let items = authors.into_iter().map(AuthorDTO::from).collect::<Vec<_>>();

    Ok(ok(
        Page::new(&page_request, count, items),
        "Authors fetched successfully",
    ))
}

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn get_author_by_id(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let author = state
        .author
        .read(&author_id)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found"))?;

    Ok(ok(AuthorDTO::from(author), "Author fetched successfully"))
}

/// Update parziale via merge col record salvato
#[instrument(skip(state, body), fields(author_id = %author_id))]
pub async fn update_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i32>,
    Json(body): Json<UpdateAuthorDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let stored = state
        .author
        .read(&author_id)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found"))?;

    let merged = stored.merge_from(&body.to_entity(author_id));
    let updated = state.author.update(&merged).await?;

    info!("Updated author {}", updated.id);
    Ok(ok(AuthorDTO::from(updated), "Author updated successfully"))
}

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.author.delete(&author_id).await?;
    if removed == 0 {
        warn!("Delete for missing author {}", author_id);
        return Err(AppError::not_found("Author not found"));
    }

    info!("Deleted author {}", author_id);
    Ok(ok("", "Author deleted successfully"))
}
