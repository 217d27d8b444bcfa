use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let size = self.book_repository.create(&BookEntity::from(book)).await?;
        info!(branch = self.branch_id.as_str(), book_id = book.id.as_str(), size, "book added");
        Ok(book.clone())
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        info!(branch = self.branch_id.as_str(), book_id = id, "book removed");
        Ok(())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await?;
        info!(branch = self.branch_id.as_str(), book_id = book.id.as_str(), "book updated");
        Ok(book.clone())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        debug!(book_id = id, "finding book");
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
        }
    }
}
