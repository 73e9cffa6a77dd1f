use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog in a map keyed by book_id. All access goes
// through a single lock and updates are version checked, so concurrent writers to the
// same book cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }
}

fn poisoned<T>(_err: T) -> LibraryError {
    LibraryError::runtime("book repository lock poisoned", None)
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().map_err(poisoned)?;
        if books.contains_key(entity.book_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("Book with ISBN {} already exists!", entity.book_id).as_str()));
        }
        books.insert(entity.book_id.to_string(), entity.clone());
        debug!("created book {} ({} in catalog)", entity.book_id, books.len());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().map_err(poisoned)?;
        let existing = books.get_mut(entity.book_id.as_str()).ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", entity.book_id).as_str())
        })?;
        if existing.version != entity.version {
            return Err(LibraryError::conflict(
                format!("stale version {} for book {}, current version is {}",
                        entity.version, entity.book_id, existing.version).as_str(),
                Some("409".to_string())));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        updated.updated_at = Utc::now().naive_utc();
        *existing = updated;
        debug!("updated book {} to version {} ({})", entity.book_id, entity.version + 1, entity.status());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().map_err(poisoned)?;
        books.get(id).cloned().ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", id).as_str())
        })
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_available(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books.values()
            .filter(|book| book.status() == BookStatus::Available)
            .cloned()
            .collect())
    }
}
