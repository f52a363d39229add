//! Catalog handlers. All of them sit behind `require_session`.

use axum::{
    extract::{Path, State},
    Json,
};
use books_core::Book;
use tracing::info;

use crate::dto::{BookFields, BookLookup, DeletedResponse, EmptyObject, ListParams};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /books?sort=by_title&limit=N
pub async fn list_books(State(state): State<AppState>, params: ListParams) -> Json<Vec<Book>> {
    Json(state.books.list_books(&params.to_query()))
}

/// GET /books/{id}
pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> Json<BookLookup> {
    Json(state.books.get_book(&id).into())
}

/// POST /add_book
pub async fn add_book(State(state): State<AppState>, fields: BookFields) -> Json<Book> {
    Json(state.books.add_book(fields.title, fields.author))
}

/// PUT /books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    fields: BookFields,
) -> Result<Json<Book>, ApiError> {
    let book = state.books.update_book(&id, fields.into_patch())?;
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeletedResponse> {
    state.books.delete_book(&id);
    Json(DeletedResponse { deleted: id })
}

/// DELETE /delete_books
pub async fn delete_all_books(State(state): State<AppState>) -> Json<EmptyObject> {
    let removed = state.books.clear_catalog();
    info!("Deleted all books ({})", removed);
    Json(EmptyObject {})
}
