use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use crate::books::domain::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::list_available_books_cmd::{ListAvailableBooksCommand, ListAvailableBooksCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::{CatalogService, ReturnStatus};
use crate::core::command::Command;
use crate::core::library::LibraryResult;

const MENU: &str = "\nLibrary Menu:
1. Add a Book
2. Borrow a Book
3. Return a Book
4. View Available Books
5. Exit
";
const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const INVALID_YEAR: &str = "Invalid year. Please try again.";
const GOODBYE: &str = "Exiting the library system. Goodbye!";

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuChoice {
    AddBook,
    BorrowBook,
    ReturnBook,
    ViewAvailableBooks,
    Exit,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(s: &str) -> Self {
        match s.trim() {
            "1" => MenuChoice::AddBook,
            "2" => MenuChoice::BorrowBook,
            "3" => MenuChoice::ReturnBook,
            "4" => MenuChoice::ViewAvailableBooks,
            "5" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

// Whether the menu loop keeps going after a step. Input running out ends it.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Step {
    Continue,
    Exit,
}

// Console drives the catalog from a line-oriented text menu. Only I/O failures end the
// loop with an error; failed catalog operations are printed and the menu is shown again.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
    add_cmd: AddBookCommand,
    borrow_cmd: BorrowBookCommand,
    return_cmd: ReturnBookCommand,
    list_cmd: ListAvailableBooksCommand,
}

impl<R, W> Console<R, W>
    where R: AsyncBufRead + Unpin + Send,
          W: AsyncWrite + Unpin + Send {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>, input: R, output: W) -> Self {
        let svc: Arc<dyn CatalogService> = Arc::from(catalog_service);
        Self {
            input,
            output,
            add_cmd: AddBookCommand::new(svc.clone()),
            borrow_cmd: BorrowBookCommand::new(svc.clone()),
            return_cmd: ReturnBookCommand::new(svc.clone()),
            list_cmd: ListAvailableBooksCommand::new(svc),
        }
    }

    pub(crate) fn into_output(self) -> W {
        self.output
    }

    pub(crate) async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.write(MENU).await?;
            self.write(CHOICE_PROMPT).await?;
            let choice = match self.read_line().await? {
                Some(line) => MenuChoice::from(line.as_str()),
                None => {
                    self.writeln("").await?;
                    MenuChoice::Exit
                }
            };
            debug!("menu choice {:?}", choice);
            let step = match choice {
                MenuChoice::AddBook => self.add_book().await?,
                MenuChoice::BorrowBook => self.borrow_book().await?,
                MenuChoice::ReturnBook => self.return_book().await?,
                MenuChoice::ViewAvailableBooks => self.display_available_books().await?,
                MenuChoice::Exit => Step::Exit,
                MenuChoice::Invalid => {
                    self.writeln(INVALID_CHOICE).await?;
                    Step::Continue
                }
            };
            if step == Step::Exit {
                self.writeln(GOODBYE).await?;
                return Ok(());
            }
        }
    }

    async fn add_book(&mut self) -> LibraryResult<Step> {
        let Some(isbn) = self.prompt("Enter ISBN: ").await? else { return Ok(Step::Exit) };
        let Some(title) = self.prompt("Enter Title: ").await? else { return Ok(Step::Exit) };
        let Some(author) = self.prompt("Enter Author: ").await? else { return Ok(Step::Exit) };
        let Some(year) = self.prompt("Enter Year: ").await? else { return Ok(Step::Exit) };
        let year = match year.trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                self.writeln(INVALID_YEAR).await?;
                return Ok(Step::Continue);
            }
        };
        let req = AddBookCommandRequest::new(isbn.as_str(), title.as_str(), author.as_str(), year);
        match self.add_cmd.execute(req).await {
            Ok(_) => self.writeln("Book added successfully!").await?,
            Err(err) => self.writeln(err.to_string().as_str()).await?,
        }
        Ok(Step::Continue)
    }

    async fn borrow_book(&mut self) -> LibraryResult<Step> {
        let Some(isbn) = self.prompt("Enter ISBN of the book to borrow: ").await? else { return Ok(Step::Exit) };
        match self.borrow_cmd.execute(BorrowBookCommandRequest::new(isbn.as_str())).await {
            Ok(res) => {
                let line = format!("You have successfully borrowed: {}", res.book.title());
                self.writeln(line.as_str()).await?
            }
            Err(err) => {
                warn!("borrow of {} failed: {}", isbn, err);
                self.writeln(err.to_string().as_str()).await?
            }
        }
        Ok(Step::Continue)
    }

    async fn return_book(&mut self) -> LibraryResult<Step> {
        let Some(isbn) = self.prompt("Enter ISBN of the book to return: ").await? else { return Ok(Step::Exit) };
        match self.return_cmd.execute(ReturnBookCommandRequest::new(isbn.as_str())).await {
            Ok(res) => match res.status {
                ReturnStatus::Returned(book) => {
                    let line = format!("You have successfully returned: {}", book.title());
                    self.writeln(line.as_str()).await?
                }
                ReturnStatus::NotFoundOrAlreadyAvailable => {
                    self.writeln("This book is either already available or doesn't exist!").await?
                }
            },
            Err(err) => self.writeln(err.to_string().as_str()).await?,
        }
        Ok(Step::Continue)
    }

    async fn display_available_books(&mut self) -> LibraryResult<Step> {
        match self.list_cmd.execute(ListAvailableBooksCommandRequest::new()).await {
            Ok(res) if res.books.is_empty() => {
                self.writeln("No books are currently available.").await?
            }
            Ok(res) => {
                self.writeln("Available Books:").await?;
                for book in res.books {
                    self.writeln(book.to_string().as_str()).await?;
                }
            }
            Err(err) => self.writeln(err.to_string().as_str()).await?,
        }
        Ok(Step::Continue)
    }

    async fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        self.write(text).await?;
        self.read_line().await
    }

    // Returns None once the input is exhausted. Only the line terminator is stripped.
    async fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn writeln(&mut self, text: &str) -> LibraryResult<()> {
        self.write(text).await?;
        self.write("\n").await
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::console::{Console, MenuChoice};
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    async fn run_script(script: &str) -> String {
        let svc = factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let mut console = Console::new(svc, script.as_bytes(), Vec::new());
        console.run().await.expect("should run menu");
        String::from_utf8(console.into_output()).expect("should be utf8")
    }

    #[tokio::test]
    async fn test_should_parse_menu_choice() {
        assert_eq!(MenuChoice::AddBook, MenuChoice::from("1"));
        assert_eq!(MenuChoice::BorrowBook, MenuChoice::from(" 2 "));
        assert_eq!(MenuChoice::ReturnBook, MenuChoice::from("3"));
        assert_eq!(MenuChoice::ViewAvailableBooks, MenuChoice::from("4"));
        assert_eq!(MenuChoice::Exit, MenuChoice::from("5"));
        assert_eq!(MenuChoice::Invalid, MenuChoice::from("6"));
        assert_eq!(MenuChoice::Invalid, MenuChoice::from("add"));
    }

    #[tokio::test]
    async fn test_should_exit_from_menu() {
        let out = run_script("5\n").await;
        assert!(out.contains("Library Menu:\n1. Add a Book\n2. Borrow a Book\n3. Return a Book\n4. View Available Books\n5. Exit\n"));
        assert!(out.contains("Enter your choice (1-5): "));
        assert!(out.ends_with("Exiting the library system. Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_should_run_lending_session() {
        let script = "1\n978-0132350884\nClean Code\nRobert C. Martin\n2008\n\
                      2\n978-0132350884\n\
                      2\n978-0132350884\n\
                      3\n978-0132350884\n\
                      3\n978-0132350884\n\
                      4\n\
                      5\n";
        let out = run_script(script).await;
        assert!(out.contains("Enter ISBN: Enter Title: Enter Author: Enter Year: Book added successfully!\n"));
        assert!(out.contains("You have successfully borrowed: Clean Code\n"));
        assert!(out.contains("Enter ISBN of the book to borrow: Book not available\n"));
        assert!(out.contains("You have successfully returned: Clean Code\n"));
        assert!(out.contains("This book is either already available or doesn't exist!\n"));
        assert!(out.contains("Available Books:\nISBN: 978-0132350884, Title: Clean Code, Author: Robert C. Martin, Year: 2008\n"));
    }

    #[tokio::test]
    async fn test_should_report_duplicate_book() {
        let script = "1\nisbn\nfirst\nauthor\n2000\n1\nisbn\nsecond\nauthor\n2001\n4\n5\n";
        let out = run_script(script).await;
        assert!(out.contains("Book with ISBN isbn already exists!\n"));
        assert!(out.contains("ISBN: isbn, Title: first, Author: author, Year: 2000\n"));
        assert!(!out.contains("Title: second"));
    }

    #[tokio::test]
    async fn test_should_show_empty_catalog() {
        let out = run_script("4\n5\n").await;
        assert!(out.contains("No books are currently available.\n"));
    }

    #[tokio::test]
    async fn test_should_survive_invalid_input() {
        let script = "9\nabc\n1\nisbn\ntitle\nauthor\nnineteen\n2\nunknown\n4\n5\n";
        let out = run_script(script).await;
        assert_eq!(2, out.matches("Invalid choice. Please try again.").count());
        assert!(out.contains("Invalid year. Please try again.\n"));
        assert!(out.contains("Book not available\n"));
        assert!(out.contains("No books are currently available.\n"));
        assert!(out.ends_with("Exiting the library system. Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_should_exit_when_input_ends() {
        let out = run_script("1\nisbn\n").await;
        assert!(out.contains("Enter Title: "));
        assert!(out.ends_with("Exiting the library system. Goodbye!\n"));

        let out = run_script("").await;
        assert!(out.ends_with("Exiting the library system. Goodbye!\n"));
    }
}
