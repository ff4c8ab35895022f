//! User services - Gestione utenti (endpoint riservati agli admin)

use crate::core::differ::Differ;
use crate::core::response::created;
use crate::core::{AppError, AppState, ok, require_role};
use crate::dtos::{CreateUserDTO, ListQuery, Page, UpdateUserDTO, UserDTO};
use crate::entities::{User, UserRole};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, current_user, body), fields(admin_id = %current_user.id))]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateUserDTO>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&current_user, &[UserRole::Admin])?;
    body.validate()?;

    let mut user = body.to_entity();
    user.password = User::hash_password(&user.password)?;

    let new_user = state.user.create(&user).await?;
    info!("Created user {}", new_user.id);
    Ok(created(UserDTO::from(new_user), "User created successfully"))
}

#[instrument(skip(state, current_user, query), fields(admin_id = %current_user.id))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&current_user, &[UserRole::Admin])?;

    let mut page_request = query.pagination();
    page_request.normalize();
    let mut filter = query.filter();
    filter.apply_defaults();
    filter.validate()?;

    let (users, count) = state.user.find_all(&page_request, &filter).await?;
    let items = users.into_iter().map(UserDTO::from).collect::<Vec<_>>();

    Ok(ok(
        Page::new(&page_request, count, items),
        "Users fetched successfully",
    ))
}

#[instrument(skip(state, current_user), fields(user_id = %user_id))]
pub async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&current_user, &[UserRole::Admin])?;

    let user = state
        .user
        .read(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(ok(UserDTO::from(user), "User fetched successfully"))
}

#[instrument(skip(state, current_user, email))]
pub async fn get_user_by_email(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&current_user, &[UserRole::Admin])?;

    let user = state
        .user
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(ok(UserDTO::from(user), "User fetched successfully"))
}

/// Update parziale: i campi assenti nel body restano come sono sul
/// record salvato.
#[instrument(skip(state, current_user, body), fields(user_id = %user_id))]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i32>,
    Json(body): Json<UpdateUserDTO>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&current_user, &[UserRole::Admin])?;
    body.validate()?;

    let stored = state
        .user
        .read(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let merged = stored.merge_from(&body.to_entity(user_id));
    let updated = state.user.update(&merged).await?;

    info!("Updated user {}", updated.id);
    Ok(ok(UserDTO::from(updated), "User updated successfully"))
}

#[instrument(skip(state, current_user), fields(user_id = %user_id))]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_role(&current_user, &[UserRole::Admin])?;

    let removed = state.user.delete(&user_id).await?;
    if removed == 0 {
        warn!("Delete for missing user {}", user_id);
        return Err(AppError::not_found("User not found"));
    }

    info!("Deleted user {}", user_id);
    Ok(ok("", "User deleted successfully"))
}
