use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is the detached copy of a catalog entry handed out by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available: bool,
    #[serde(serialize_with = "serializer::serialize")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "serializer::serialize")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(book_id: &str, title: &str, author: &str, publication_year: i32) -> BookDto {
        BookDto {
            book_id: book_id.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available: true,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
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

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ISBN: {}, Title: {}, Author: {}, Year: {}",
               self.book_id, self.title, self.author, self.publication_year)
    }
}
