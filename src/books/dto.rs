use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDto is the wire form of a book for both drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl BookDto {
    pub fn new(id: &str, title: &str, author: &str, year: i64) -> BookDto {
        BookDto {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for BookDto {
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
    use serde_json::json;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("1", "title", "author", 1999);
        assert_eq!("1", book.id.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(1999, book.year);
    }

    #[tokio::test]
    async fn test_should_serialize_wire_fields() {
        let book = BookDto::new("2", "Advanced Go", "Jane Doe", 2021);
        let val = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(json!({"id": "2", "title": "Advanced Go", "author": "Jane Doe", "year": 2021}), val);
    }

    #[tokio::test]
    async fn test_should_reject_string_year() {
        let res = serde_json::from_str::<BookDto>(r#"{"id":"1","title":"t","author":"a","year":"2020"}"#);
        assert!(res.is_err());
    }
}
