use chrono::{NaiveDateTime, Utc};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts one catalog entry keyed by its ISBN. Only the availability flag
// changes after creation; version and timestamps are maintained by the repository.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct BookEntity {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: &str, title: &str, author: &str, publication_year: i32, available: bool) -> Self {
        Self {
            book_id: book_id.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn publication_year(&self) -> i32 {
        self.publication_year
    }

    fn is_available(&self) -> bool {
        self.available
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("978-0132350884", "Clean Code", "Robert C. Martin", 2008, true);
        assert_eq!("978-0132350884", book.id().as_str());
        assert_eq!("Clean Code", book.title());
        assert_eq!("Robert C. Martin", book.author());
        assert_eq!(2008, book.publication_year());
        assert_eq!(0, book.version());
        assert_eq!(BookStatus::Available, book.status());
    }

    #[tokio::test]
    async fn test_should_accept_unvalidated_fields() {
        let book = BookEntity::new("", "", "", -300, false);
        assert_eq!("", book.id().as_str());
        assert_eq!(-300, book.publication_year());
        assert!(!book.is_available());
    }

    #[tokio::test]
    async fn test_should_set_available() {
        let mut book = BookEntity::new("isbn", "title", "author", 1999, true);
        book.set_available(false);
        assert_eq!(BookStatus::Borrowed, book.status());
        book.set_available(false);
        assert!(!book.is_available());
        book.set_available(true);
        assert_eq!(BookStatus::Available, book.status());
        assert_eq!("isbn", book.id().as_str());
    }
}
