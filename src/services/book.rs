//! Book services - CRUD libri
//!
//! Le risposte incorporano autore, editore e categorie; il nome della
//! copertina viene sostituito con un link firmato allo storage prima di
//! uscire, il nome interno dell'oggetto non raggiunge mai il client.

use crate::core::differ::Differ;
use crate::core::response::created;
use crate::core::{AppError, AppState, ok};
use crate::dtos::{BookDTO, BookListQuery, CreateBookDTO, Page, UpdateBookDTO};
use crate::entities::Book;
use crate::repositories::{Delete, Read};
use crate::storage::ObjectStorage;
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};
use futures::future;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Carica le relazioni e risolve la copertina in un link firmato
async fn enrich(state: &AppState, mut book: Book) -> Result<BookDTO, AppError> {
    let author = state
        .author
        .read(&book.author_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Something went wrong"))?;

    let publisher = state
        .publisher
        .read(&book.publisher_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Something went wrong"))?;

    let categories = state.book.categories_of(&book.id).await?;

    let cover = state.storage.download(&state.bucket, &book.cover).await;
    book.cover = cover.and_then(|c| c.link).unwrap_or_default();

    Ok(BookDTO::from_parts(&book, &author, &publisher, &categories))
}

#[instrument(skip(state, body))]
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let book = state.book.create(&body.to_entity(), &body.categories).await?;
    info!("Created book {}", book.id);

    let response = enrich(&state, book).await?;
    Ok(created(response, "Book created successfully"))
}

#[instrument(skip(state, query))]
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut page_request = query.pagination();
    page_request.normalize();
    let mut filter = query.filter();
    filter.apply_defaults();
    filter.base.validate()?;
    filter.validate()?;

    let (books, count) = state.book.find_all(&page_request, &filter).await?;
    debug!("Fetched {} of {} books", books.len(), count);

    let items = future::join_all(books.into_iter().map(|book| enrich(&state, book)))
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ok(
        Page::new(&page_request, count, items),
        "Books fetched successfully",
    ))
}

#[instrument(skip(state), fields(book_id = %book_id))]
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let book = state
        .book
        .read(&book_id)
        .await?
        .ok_or_else(|| AppError::not_found("Book not found"))?;

    let response = enrich(&state, book).await?;
    Ok(ok(response, "Book fetched successfully"))
}

/// Update parziale: i campi scalari passano dal merge col record
/// salvato, una lista di categorie non vuota sostituisce le associazioni.
#[instrument(skip(state, body), fields(book_id = %book_id))]
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<i32>,
    Json(body): Json<UpdateBookDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let stored = state
        .book
        .read(&book_id)
        .await?
        .ok_or_else(|| AppError::not_found("Book not found"))?;

    let merged = stored.merge_from(&body.to_entity(book_id));
    let categories = if body.categories.is_empty() {
        None
    } else {
        Some(body.categories.as_slice())
    };

    let updated = state.book.update(&merged, categories).await?;
    info!("Updated book {}", updated.id);

    let response = enrich(&state, updated).await?;
    Ok(ok(response, "Book updated successfully"))
}

#[instrument(skip(state), fields(book_id = %book_id))]
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.book.delete(&book_id).await?;
    if removed == 0 {
        warn!("Delete for missing book {}", book_id);
        return Err(AppError::not_found("Book not found"));
    }

    info!("Deleted book {}", book_id);
    Ok(ok("", "Book deleted successfully"))
}
