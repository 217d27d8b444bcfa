use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a catalog record. The id is supplied by
// callers and is not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl BookEntity {
    pub fn new(id: &str, title: &str, author: &str, year: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> i64 {
        self.year
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("1", "title", "author", 2020);
        assert_eq!("1", book.id.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(2020, book.year);
    }

    #[tokio::test]
    async fn test_should_summarize_book() {
        let book = BookEntity::new("1", "Go Programming", "John Doe", 2020);
        assert_eq!("ID: 1 | Title: Go Programming | Author: John Doe | Year: 2020", book.summary());
    }
}
