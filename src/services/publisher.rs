//! Publisher services - CRUD editori

use crate::core::differ::Differ;
use crate::core::response::created;
use crate::core::{AppError, AppState, ok};
use crate::dtos::{CreatePublisherDTO, ListQuery, Page, PublisherDTO, UpdatePublisherDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body))]
pub async fn create_publisher(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePublisherDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let publisher = state.publisher.create(&body.to_entity()).await?;
    info!("Created publisher {}", publisher.id);
    Ok(created(
        PublisherDTO::from(publisher),
        "Publisher created successfully",
    ))
}

#[instrument(skip(state, query))]
pub async fn list_publishers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut page_request = query.pagination();
    page_request.normalize();
    let mut filter = query.filter();
    filter.apply_defaults();
    filter.validate()?;

    let (publishers, count) = state.publisher.find_all(&page_request, &filter).await?;
    let items = publishers
        .into_iter()
        .map(PublisherDTO::from)
        .collect::<Vec<_>>();

    Ok(ok(
        Page::new(&page_request, count, items),
        "Publishers fetched successfully",
    ))
}

#[instrument(skip(state), fields(publisher_id = %publisher_id))]
pub async fn get_publisher_by_id(
    State(state): State<Arc<AppState>>,
    Path(publisher_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let publisher = state
        .publisher
        .read(&publisher_id)
        .await?
        .ok_or_else(|| AppError::not_found("Publisher not found"))?;

    Ok(ok(
        PublisherDTO::from(publisher),
        "Publisher fetched successfully",
    ))
}

/// Update parziale via merge col record salvato
#[instrument(skip(state, body), fields(publisher_id = %publisher_id))]
pub async fn update_publisher(
    State(state): State<Arc<AppState>>,
    Path(publisher_id): Path<i32>,
    Json(body): Json<UpdatePublisherDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let stored = state
        .publisher
        .read(&publisher_id)
        .await?
        .ok_or_else(|| AppError::not_found("Publisher not found"))?;

    let merged = stored.merge_from(&body.to_entity(publisher_id));
    let updated = state.publisher.update(&merged).await?;

    info!("Updated publisher {}", updated.id);
    Ok(ok(
        PublisherDTO::from(updated),
        "Publisher updated successfully",
    ))
}

#[instrument(skip(state), fields(publisher_id = %publisher_id))]
pub async fn delete_publisher(
    State(state): State<Arc<AppState>>,
    Path(publisher_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.publisher.delete(&publisher_id).await?;
    if removed == 0 {
        warn!("Delete for missing publisher {}", publisher_id);
        return Err(AppError::not_found("Publisher not found"));
    }

    info!("Deleted publisher {}", publisher_id);
    Ok(ok("", "Publisher deleted successfully"))
}
