//! Biblioteca - Backend per la gestione di un catalogo bibliotecario
//!
//! Espone i moduli principali e il router per i test di integrazione.

pub mod config;
pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod storage;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState};
pub use config::Config;
pub use services::root;
pub use storage::DiskStorage;

use crate::core::authentication_middleware;
use axum::{Router, middleware, routing::{get, post}};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes(state.clone()))
        .nest("/users", configure_user_routes(state.clone()))
        .nest("/authors", configure_author_routes(state.clone()))
        .nest("/publishers", configure_publisher_routes(state.clone()))
        .nest("/categories", configure_category_routes(state.clone()))
        .nest("/books", configure_book_routes(state.clone()))
        .nest("/storage", configure_storage_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Login e register pubblici; /current richiede il token
fn configure_auth_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::services::*;

    let public_routes = Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user));

    let protected_routes = Router::new()
        .route("/current", get(current_auth))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(protected_routes)
}

/// Gestione utenti: autenticazione obbligatoria, il controllo sul ruolo
/// admin sta negli handler
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", post(create_user).get(list_users))
        .route(
            "/{user_id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .route("/email/{email}", get(get_user_by_email))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_author_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", post(create_author).get(list_authors))
        .route(
            "/{author_id}",
            get(get_author_by_id).put(update_author).delete(delete_author),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_publisher_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", post(create_publisher).get(list_publishers))
        .route(
            "/{publisher_id}",
            get(get_publisher_by_id)
                .put(update_publisher)
                .delete(delete_publisher),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_category_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/{category_id}",
            get(get_category_by_id)
                .put(update_category)
                .delete(delete_category),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_book_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", post(create_book).get(list_books))
        .route(
            "/{book_id}",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Upload protetto; il download è pubblico ma pretende il token firmato
/// contenuto nel link
fn configure_storage_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::services::*;

    let protected_routes = Router::new()
        .route("/upload", post(upload_object))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    let public_routes = Router::new().route("/{name}", get(serve_object));

    protected_routes.merge(public_routes)
}
