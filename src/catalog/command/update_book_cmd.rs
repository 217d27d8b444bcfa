use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The body never names the book: book_id comes from the route or the
// console prompt, and any "id" key in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(skip_deserializing)]
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str, year: i64) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    pub fn with_book_id(mut self, book_id: &str) -> Self {
        self.book_id = book_id.to_string();
        self
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.book_id.as_str(), self.title.as_str(), self.author.as_str(), self.year)
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
