use axum_test::TestServer;
use biblioteca::core::AppState;
use biblioteca::storage::DiskStorage;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test, con storage su una directory temporanea
///
/// # Arguments
/// * `pool` - Connection pool Postgres
///
/// # Returns
/// Arc<AppState> configurato con il JWT secret di test
pub fn create_test_state(pool: PgPool) -> Arc<AppState> {
    let storage_root =
        std::env::temp_dir().join(format!("biblioteca-tests-{}", std::process::id()));
    let storage = DiskStorage::new(
        storage_root,
        "http://localhost:3000".to_string(),
        TEST_JWT_SECRET.to_string(),
    );

    Arc::new(AppState::new(
        pool,
        TEST_JWT_SECRET.to_string(),
        "covers".to_string(),
        storage,
    ))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = biblioteca::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing
///
/// # Arguments
/// * `user_id` - ID dell'utente per cui generare il token
/// * `role` - Ruolo dell'utente ("admin" o "user")
/// * `jwt_secret` - Secret key per firmare il token
///
/// # Returns
/// Token JWT valido per 24 ore
pub fn create_test_jwt(user_id: i32, role: &str, jwt_secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        sub: i32,
        role: String,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}
