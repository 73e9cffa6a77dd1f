use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) publication_year: i32,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str(), self.publication_year)
    }
}


#[derive(Debug)]
pub(crate) struct AddBookCommandResponse {
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
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    fn new_cmd() -> AddBookCommand {
        let svc = factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        AddBookCommand::new(Arc::from(svc))
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = new_cmd();

        let res = cmd.execute(AddBookCommandRequest::new("978-0132350884", "Clean Code", "Robert C. Martin", 2008))
            .await.expect("should add book");
        assert_eq!("978-0132350884", res.book.book_id.as_str());
        assert!(res.book.available);
    }

    #[tokio::test]
    async fn test_should_fail_add_duplicate_book() {
        let cmd = new_cmd();

        let _ = cmd.execute(AddBookCommandRequest::new("isbn", "test book", "author", 2000))
            .await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new("isbn", "test book", "author", 2000)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
