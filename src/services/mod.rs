//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica risorsa.

pub mod auth;
pub mod author;
pub mod book;
pub mod category;
pub mod publisher;
pub mod storage;
pub mod user;

// Re-exports per facilitare l'import
pub use auth::{current_auth, login_user, register_user};
pub use author::{create_author, delete_author, get_author_by_id, list_authors, update_author};
pub use book::{create_book, delete_book, get_book_by_id, list_books, update_book};
pub use category::{
    create_category, delete_category, get_category_by_id, list_categories, update_category,
};
pub use publisher::{
    create_publisher, delete_publisher, get_publisher_by_id, list_publishers, update_publisher,
};
pub use storage::{serve_object, upload_object};
pub use user::{
    create_user, delete_user, get_user_by_email, get_user_by_id, list_users, update_user,
};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
