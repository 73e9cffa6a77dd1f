use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListAvailableBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListAvailableBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListAvailableBooksCommandRequest {}

impl ListAvailableBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug)]
pub(crate) struct ListAvailableBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListAvailableBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListAvailableBooksCommandRequest, ListAvailableBooksCommandResponse> for ListAvailableBooksCommand {
    async fn execute(&self, _req: ListAvailableBooksCommandRequest) -> Result<ListAvailableBooksCommandResponse, CommandError> {
        self.catalog_service.available_books()
            .await.map_err(CommandError::from).map(ListAvailableBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::command::list_available_books_cmd::{ListAvailableBooksCommand, ListAvailableBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_list_available_books() {
        let svc: Arc<dyn CatalogService> = Arc::from(
            factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory));
        let list_cmd = ListAvailableBooksCommand::new(svc.clone());

        let res = list_cmd.execute(ListAvailableBooksCommandRequest::new()).await.expect("should list books");
        assert!(res.books.is_empty());

        for (isbn, title) in [("a", "first"), ("b", "second"), ("c", "third")] {
            let _ = svc.add_book(&BookDto::new(isbn, title, "author", 2000)).await.expect("should add book");
        }
        let _ = svc.borrow_book("b").await.expect("should borrow book");

        let res = list_cmd.execute(ListAvailableBooksCommandRequest::new()).await.expect("should list books");
        let ids: HashSet<String> = res.books.into_iter().map(|b| b.book_id).collect();
        assert_eq!(HashSet::from(["a".to_string(), "c".to_string()]), ids);
    }
}
