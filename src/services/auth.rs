//! Auth services - Registrazione, login e utente corrente

use crate::core::{AppError, AppState, encode_jwt, ok};
use crate::core::response::created;
use crate::dtos::{CurrentUserDTO, LoginDTO, RegisterDTO, TokenDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let mut user = body.to_entity();
    user.password = User::hash_password(&user.password)?;

    // email duplicata → violazione di unicità → 409
    let new_user = state.user.create(&user).await?;

    info!("Registered user {}", new_user.id);
    Ok(created(
        UserDTO::from(new_user),
        "Registration successful",
    ))
}

#[instrument(skip(state, body))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    // stesso errore per email inesistente e password sbagliata, niente
    // indizi su quale dei due sia
    let user = match state.user.find_by_email(&body.email).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized("Invalid email or password"));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Wrong password for user {}", user.id);
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let token = encode_jwt(user.id, user.role, &state.jwt_secret)?;

    info!("User {} logged in", user.id);
    Ok(ok(TokenDTO { token }, "Login successful"))
}

/// L'utente arriva dall'Extension popolata dal middleware di
/// autenticazione.
#[instrument(skip(current_user), fields(user_id = %current_user.id))]
pub async fn current_auth(
    Extension(current_user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CurrentUserDTO::from(current_user), ""))
}
