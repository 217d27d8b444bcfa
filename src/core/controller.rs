use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

pub const NOT_FOUND_MESSAGE: &str = "Book not found";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog,
        }
    }
}

// A tuple of status and plain-text body; axum only labels JSON responses as JSON.
pub type ServerError = (StatusCode, String);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Validation { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
        }
    }
}
