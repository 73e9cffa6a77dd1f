use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, ReturnStatus};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BOOK_NOT_AVAILABLE, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    metadata: HashMap<String, String>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            book_repository,
            events_publisher,
        }
    }

    // Looks up a book, treating a missing id the same as any other lookup miss.
    async fn find_existing(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        match self.book_repository.get(id).await {
            Ok(book) => Ok(Some(book)),
            Err(LibraryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    // Publishing happens after the change is stored, so a failed publish is only logged.
    async fn publish(&self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event).await {
            warn!("failed to publish event {} for book {}: {}", event.name, event.key, err);
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::new(book.book_id.as_str(), book.title.as_str(),
                                     book.author.as_str(), book.publication_year, true);
        let added = BookDto::from(&entity);
        let event = DomainEvent::added(
            "book_added", "catalog", added.book_id.as_str(), &self.metadata, &added)?;
        if let Err(err) = self.book_repository.create(&entity).await {
            warn!("rejected book {}: {}", entity.book_id, err);
            return Err(err);
        }
        self.publish(&event).await;
        info!("added book {}", added.book_id);
        Ok(added)
    }

    async fn borrow_book(&self, id: &str) -> LibraryResult<BookDto> {
        let mut book = match self.find_existing(id).await? {
            Some(book) if book.available => book,
            _ => {
                warn!("book {} is not available for borrowing", id);
                return Err(LibraryError::unavailable(BOOK_NOT_AVAILABLE));
            }
        };
        book.set_available(false);
        let borrowed = BookDto::from(&book);
        let event = DomainEvent::updated("book_borrowed", "catalog", id, &self.metadata, &borrowed)?;
        match self.book_repository.update(&book).await {
            Ok(_) => {}
            // another borrower updated the book since it was read
            Err(err) if err.retryable() => {
                warn!("lost race borrowing book {}: {}", id, err);
                return Err(LibraryError::unavailable(BOOK_NOT_AVAILABLE));
            }
            Err(err) => return Err(err),
        }
        self.publish(&event).await;
        info!("borrowed book {}", id);
        Ok(borrowed)
    }

    async fn return_book(&self, id: &str) -> LibraryResult<ReturnStatus> {
        let mut book = match self.find_existing(id).await? {
            Some(book) if !book.available => book,
            _ => {
                info!("book {} is either already available or doesn't exist", id);
                return Ok(ReturnStatus::NotFoundOrAlreadyAvailable);
            }
        };
        book.set_available(true);
        let returned = BookDto::from(&book);
        let event = DomainEvent::updated("book_returned", "catalog", id, &self.metadata, &returned)?;
        match self.book_repository.update(&book).await {
            Ok(_) => {}
            Err(err) if err.retryable() => {
                info!("book {} was returned concurrently: {}", id, err);
                return Ok(ReturnStatus::NotFoundOrAlreadyAvailable);
            }
            Err(err) => return Err(err),
        }
        self.publish(&event).await;
        info!("returned book {}", id);
        Ok(ReturnStatus::Returned(returned))
    }

    async fn available_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_available().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.publication_year,
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.publication_year,
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
