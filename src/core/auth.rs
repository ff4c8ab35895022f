use crate::core::{AppError, AppState};
use crate::entities::{User, UserRole};
use crate::repositories::Read;
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Contenuto tipizzato del token jwt: id utente e ruolo, niente mappe
/// di claims generiche.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub sub: i32,
    pub role: UserRole,
}

/// Token valido 7 giorni, firmato HS256 con il secret applicativo
#[instrument(skip(secret), fields(user_id = %user_id))]
pub fn encode_jwt(user_id: i32, role: UserRole, secret: &str) -> Result<String, AppError> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire = Duration::days(7);
    let exp = (now + expire).timestamp() as usize;
    let iat = now.timestamp() as usize;
    let claims = Claims {
        exp,
        iat,
        sub: user_id,
        role,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        AppError::internal_server_error("Something went wrong")
    })
}

pub fn decode_jwt(
    jwt_token: &str,
    secret: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
}

/// Middleware di autenticazione: estrae il Bearer token, lo decodifica e
/// carica l'utente dal database mettendolo nelle Extension della request.
///
/// L'utente viene riletto ad ogni richiesta, così un cambio di ruolo o
/// una cancellazione hanno effetto immediato anche su token ancora validi.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::forbidden("Empty header is not allowed")
        })?,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::forbidden("Please add the JWT token to the header"));
        }
    };

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header is not a Bearer token");
        AppError::forbidden("Please add the JWT token to the header")
    })?;

    let token_data = match decode_jwt(token, &state.jwt_secret) {
        Ok(data) => data,
        Err(_) => {
            warn!("Failed to decode JWT token");
            return Err(AppError::unauthorized("Unable to decode token"));
        }
    };

    // Fetch the user details from the database
    let current_user = match state.user.read(&token_data.claims.sub).await? {
        Some(user) => user,
        None => {
            warn!("User {} not found in database", token_data.claims.sub);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Helper per gli handler riservati a determinati ruoli.
///
/// Il controllo usa il ruolo letto dal database, non quello nel token.
pub fn require_role(user: &User, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&user.role) {
        warn!(
            "User {} has insufficient role {:?}, required one of: {:?}",
            user.id, user.role, allowed_roles
        );
        return Err(AppError::forbidden("Insufficient roles"));
    }
    Ok(())
}
