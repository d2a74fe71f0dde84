use shelf_http::{AppError, PathId, ValidatedJson};
use shelf_validation::ClientInputError;

use super::models::BookRecord;

/// Fetch a book by id (acknowledgment only; nothing is stored)
pub async fn get_book(PathId(id): PathId) -> String {
    tracing::debug!(book_id = id, "book requested");
    format!("This action returns book #{id}")
}

/// `GET /book/add` shadows `/{id}`; answer it as a non-integer id
pub async fn get_add_segment() -> AppError {
    AppError::from(ClientInputError {
        name: "id".to_string(),
        value: "add".to_string(),
    })
}

/// Accept a validated book body
pub async fn add_book(ValidatedJson(book): ValidatedJson<BookRecord>) -> String {
    tracing::info!(book_id = book.id, book_name = %book.name, "book accepted");
    format!("This action adds book #{}", book.id)
}
