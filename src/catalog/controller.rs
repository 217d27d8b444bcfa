use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::warn;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ServerError};
use crate::core::library::LibraryError;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books",
               get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state)
}

// Bodies are read as raw bytes so a missing content type is not a rejection;
// only the JSON itself is checked.
fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, CommandError> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "rejecting malformed book payload");
        CommandError::from(LibraryError::from(err))
    })
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = parse_body(&body)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req: UpdateBookCommandRequest = parse_body(&body)?;
    let res = UpdateBookCommand::new(state.catalog).execute(req.with_book_id(book_id.as_str())).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let _ = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
