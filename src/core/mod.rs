//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione e JWT
//! - Differ per gli update parziali
//! - Gestione errori e envelope di risposta
//! - Stato applicazione

pub mod auth;
pub mod differ;
pub mod error;
pub mod response;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{Claims, authentication_middleware, decode_jwt, encode_jwt, require_role};
pub use differ::{Differ, ZeroValue, merged};
pub use error::{AppError, FieldError};
pub use response::{WebResponse, created, ok};
pub use state::AppState;
