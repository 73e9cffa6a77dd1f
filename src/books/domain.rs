use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn publication_year(&self) -> i32;
    fn is_available(&self) -> bool;

    fn status(&self) -> BookStatus {
        BookStatus::from(self.is_available())
    }
}
