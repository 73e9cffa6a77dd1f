use std::sync::Arc;
use async_trait::async_trait;
use crate::catalog::domain::{CatalogService, ReturnStatus};
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug)]
pub(crate) struct ReturnBookCommandResponse {
    pub status: ReturnStatus,
}

impl ReturnBookCommandResponse {
    pub fn new(status: ReturnStatus) -> Self {
        Self {
            status,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::domain::{CatalogService, ReturnStatus};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let svc: Arc<dyn CatalogService> = Arc::from(
            factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory));
        let return_cmd = ReturnBookCommand::new(svc.clone());

        let book = BookDto::new("isbn", "test book", "author", 2000);
        let _ = svc.add_book(&book).await.expect("should add book");
        let _ = svc.borrow_book("isbn").await.expect("should borrow book");

        let res = return_cmd.execute(ReturnBookCommandRequest::new("isbn")).await.expect("should return book");
        assert!(matches!(res.status, ReturnStatus::Returned(ref b) if b.title == "test book"));

        let res = return_cmd.execute(ReturnBookCommandRequest::new("isbn")).await.expect("should not fail");
        assert_eq!(ReturnStatus::NotFoundOrAlreadyAvailable, res.status);
    }
}
