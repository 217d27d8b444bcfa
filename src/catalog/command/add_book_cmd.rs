use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// All four fields must be present; the id is caller supplied.
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl AddBookCommandRequest {
    pub fn new(id: &str, title: &str, author: &str, year: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    pub fn validate(&self) -> Result<(), LibraryError> {
        if self.id.trim().is_empty() {
            return Err(LibraryError::validation("book id must not be empty"));
        }
        Ok(())
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.id.as_str(), self.title.as_str(), self.author.as_str(), self.year)
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service")
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = AddBookCommand::new(SUT_SVC.get().await.clone());

        let res = cmd.execute(AddBookCommandRequest::new("add_cmd", "test book", "someone", 2010))
            .await.expect("should add book");
        assert_eq!(BookDto::new("add_cmd", "test book", "someone", 2010), res.book);
    }

    #[tokio::test]
    async fn test_should_reject_empty_id() {
        let cmd = AddBookCommand::new(SUT_SVC.get().await.clone());

        let res = cmd.execute(AddBookCommandRequest::new("  ", "test book", "someone", 2010)).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_require_all_fields() {
        let res = serde_json::from_str::<AddBookCommandRequest>(r#"{"id":"1","title":"t"}"#);
        assert!(res.is_err());
    }
}
