use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Every operation takes the lock once for its whole read-then-write span, so
// the HTTP handlers and the console never interleave inside one operation.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        books.push(entity.clone());
        debug!(book_id = entity.id.as_str(), size = books.len(), "book appended");
        Ok(books.len())
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == entity.id) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("book not found for {}", entity.id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|b| b.id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let pos = books.iter().position(|b| b.id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))?;
        books.remove(pos);
        Ok(1)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

impl BookRepository for MemoryBookRepository {}
