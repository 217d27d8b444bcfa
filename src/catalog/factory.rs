use std::sync::Arc;
use crate::books::dto::BookDto;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

// records every fresh process starts with
pub fn fixture_books() -> Vec<BookDto> {
    vec![
        BookDto::new("1", "Go Programming", "John Doe", 2020),
        BookDto::new("2", "Advanced Go", "Jane Doe", 2021),
    ]
}

pub async fn create_catalog_service(config: &Configuration) -> LibraryResult<Arc<dyn CatalogService>> {
    let book_repo = factory::create_book_repository();
    let svc = CatalogServiceImpl::new(config, book_repo);
    if config.seed_fixtures {
        for book in fixture_books() {
            svc.add_book(&book).await?;
        }
    }
    Ok(Arc::new(svc))
}

#[cfg(test)]
mod tests {
    use crate::catalog::factory::{create_catalog_service, fixture_books};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_seed_fixtures() {
        let svc = create_catalog_service(&Configuration::new("test")).await.expect("should build service");
        let books = svc.list_books().await.expect("should list books");
        assert_eq!(fixture_books(), books);
    }

    #[tokio::test]
    async fn test_should_skip_fixtures() {
        let mut config = Configuration::new("test");
        config.seed_fixtures = false;
        let svc = create_catalog_service(&config).await.expect("should build service");
        assert!(svc.list_books().await.expect("should list books").is_empty());
    }
}
