//! Category services - CRUD categorie

use crate::core::differ::Differ;
use crate::core::response::created;
use crate::core::{AppError, AppState, ok};
use crate::dtos::{CategoryDTO, CreateCategoryDTO, ListQuery, Page, UpdateCategoryDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body))]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCategoryDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let category = state.category.create(&body.to_entity()).await?;
    info!("Created category {}", category.id);
    Ok(created(
        CategoryDTO::from(category),
        "Category created successfully",
    ))
}

#[instrument(skip(state, query))]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut page_request = query.pagination();
    page_request.normalize();
    let mut filter = query.filter();
    filter.apply_defaults();
    filter.validate()?;

    let (categories, count) = state.category.find_all(&page_request, &filter).await?;
    let items = categories
        .into_iter()
        .map(CategoryDTO::from)
        .collect::<Vec<_>>();

    Ok(ok(
        Page::new(&page_request, count, items),
        "Categories fetched successfully",
    ))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn get_category_by_id(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = state
        .category
        .read(&category_id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    Ok(ok(
        CategoryDTO::from(category),
        "Category fetched successfully",
    ))
}

/// Update parziale via merge col record salvato
#[instrument(skip(state, body), fields(category_id = %category_id))]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
    Json(body): Json<UpdateCategoryDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let stored = state
        .category
        .read(&category_id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    let merged = stored.merge_from(&body.to_entity(category_id));
    let updated = state.category.update(&merged).await?;

    info!("Updated category {}", updated.id);
    Ok(ok(
        CategoryDTO::from(updated),
        "Category updated successfully",
    ))
}

#[instrument(skip(state), fields(category_id = %category_id))]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.category.delete(&category_id).await?;
    if removed == 0 {
        warn!("Delete for missing category {}", category_id);
        return Err(AppError::not_found("Category not found"));
    }

    info!("Deleted category {}", category_id);
    Ok(ok("", "Category deleted successfully"))
}
