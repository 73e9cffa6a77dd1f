pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// ReturnStatus reports the outcome of a return; an unknown or already available book is a
// no-op rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ReturnStatus {
    Returned(BookDto),
    NotFoundOrAlreadyAvailable,
}

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn borrow_book(&self, id: &str) -> LibraryResult<BookDto>;
    async fn return_book(&self, id: &str) -> LibraryResult<ReturnStatus>;
    async fn available_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
}
