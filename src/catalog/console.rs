use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::{debug, info};
use crate::books::domain::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

const MENU: &str = "\n--- Book Management CLI ---\n\
1. View all books\n\
2. View a book by ID\n\
3. Add a new book\n\
4. Update a book by ID\n\
5. Delete a book by ID\n\
6. Exit CLI\n";

enum Step {
    Continue,
    Quit,
    Closed,
}

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    /// The user chose "6".
    Quit,
    /// The input reached end of file before "6" was chosen.
    InputClosed,
}

/// Interactive menu over the shared catalog.
///
/// Reads one line per prompt. Closing the input ends the loop without
/// printing the exit message; only "6" reports [`ConsoleExit::Quit`].
pub struct Console<R, W> {
    catalog: Arc<dyn CatalogService>,
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio(catalog: Arc<dyn CatalogService>) -> Self {
        Console::new(catalog, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
    where R: AsyncBufRead + Unpin + Send,
          W: AsyncWrite + Unpin + Send {
    pub fn new(catalog: Arc<dyn CatalogService>, reader: R, writer: W) -> Self {
        Self {
            catalog,
            reader,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn run(&mut self) -> LibraryResult<ConsoleExit> {
        loop {
            self.say(MENU).await?;
            let Some(choice) = self.input("Select an option: ").await? else {
                info!("console input closed");
                return Ok(ConsoleExit::InputClosed);
            };
            let step = match choice.parse::<u8>() {
                Ok(1) => self.view_all_books().await?,
                Ok(2) => self.view_book_by_id().await?,
                Ok(3) => self.add_book().await?,
                Ok(4) => self.update_book_by_id().await?,
                Ok(5) => self.delete_book_by_id().await?,
                Ok(6) => {
                    self.say("Exiting CLI.\n").await?;
                    Step::Quit
                }
                _ => {
                    self.say("Invalid choice, please try again.\n").await?;
                    Step::Continue
                }
            };
            match step {
                Step::Continue => {}
                Step::Quit => return Ok(ConsoleExit::Quit),
                Step::Closed => {
                    info!("console input closed");
                    return Ok(ConsoleExit::InputClosed);
                }
            }
        }
    }

    async fn view_all_books(&mut self) -> LibraryResult<Step> {
        let res = ListBooksCommand::new(self.catalog.clone())
            .execute(ListBooksCommandRequest::default()).await.map_err(LibraryError::from)?;
        if res.books.is_empty() {
            self.say("No books available.\n").await?;
            return Ok(Step::Continue);
        }
        let mut out = String::from("\nList of Books:\n");
        for book in &res.books {
            out.push_str(book.summary().as_str());
            out.push('\n');
        }
        self.say(out.as_str()).await?;
        Ok(Step::Continue)
    }

    async fn view_book_by_id(&mut self) -> LibraryResult<Step> {
        let Some(book_id) = self.input("Enter book ID: ").await? else {
            return Ok(Step::Closed);
        };
        let res = GetBookCommand::new(self.catalog.clone())
            .execute(GetBookCommandRequest::new(book_id)).await;
        match res {
            Ok(res) => self.say(format!("{}\n", res.book.summary()).as_str()).await?,
            Err(CommandError::NotFound { .. }) => self.say("Book not found.\n").await?,
            Err(err) => return Err(LibraryError::from(err)),
        }
        Ok(Step::Continue)
    }

    async fn add_book(&mut self) -> LibraryResult<Step> {
        let Some(id) = self.input("Enter book ID: ").await? else { return Ok(Step::Closed) };
        let Some(title) = self.input("Enter book title: ").await? else { return Ok(Step::Closed) };
        let Some(author) = self.input("Enter book author: ").await? else { return Ok(Step::Closed) };
        let Some(year) = self.year_input("Enter publication year: ").await? else { return Ok(Step::Closed) };

        let req = AddBookCommandRequest::new(id.as_str(), title.as_str(), author.as_str(), year);
        match AddBookCommand::new(self.catalog.clone()).execute(req).await {
            Ok(_) => self.say("Book added successfully.\n").await?,
            Err(CommandError::Validation { message }) => {
                self.say(format!("Invalid book: {}\n", message).as_str()).await?
            }
            Err(err) => return Err(LibraryError::from(err)),
        }
        Ok(Step::Continue)
    }

    async fn update_book_by_id(&mut self) -> LibraryResult<Step> {
        let Some(book_id) = self.input("Enter book ID to update: ").await? else { return Ok(Step::Closed) };
        let found = GetBookCommand::new(self.catalog.clone())
            .execute(GetBookCommandRequest::new(book_id.clone())).await;
        match found {
            Ok(_) => {}
            Err(CommandError::NotFound { .. }) => {
                self.say("Book not found.\n").await?;
                return Ok(Step::Continue);
            }
            Err(err) => return Err(LibraryError::from(err)),
        }

        let Some(title) = self.input("Enter new title: ").await? else { return Ok(Step::Closed) };
        let Some(author) = self.input("Enter new author: ").await? else { return Ok(Step::Closed) };
        let Some(year) = self.year_input("Enter new publication year: ").await? else { return Ok(Step::Closed) };

        let req = UpdateBookCommandRequest::new(book_id.as_str(), title.as_str(), author.as_str(), year);
        match UpdateBookCommand::new(self.catalog.clone()).execute(req).await {
            Ok(_) => self.say("Book updated successfully.\n").await?,
            // removed by another client while the prompts were open
            Err(CommandError::NotFound { .. }) => self.say("Book not found.\n").await?,
            Err(err) => return Err(LibraryError::from(err)),
        }
        Ok(Step::Continue)
    }

    async fn delete_book_by_id(&mut self) -> LibraryResult<Step> {
        let Some(book_id) = self.input("Enter book ID to delete: ").await? else { return Ok(Step::Closed) };
        match RemoveBookCommand::new(self.catalog.clone())
            .execute(RemoveBookCommandRequest::new(book_id)).await {
            Ok(_) => self.say("Book deleted successfully.\n").await?,
            Err(CommandError::NotFound { .. }) => self.say("Book not found.\n").await?,
            Err(err) => return Err(LibraryError::from(err)),
        }
        Ok(Step::Continue)
    }

    async fn say(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    // None once the input is closed.
    async fn input(&mut self, prompt: &str) -> LibraryResult<Option<String>> {
        self.say(prompt).await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn year_input(&mut self, prompt: &str) -> LibraryResult<Option<i64>> {
        loop {
            let Some(text) = self.input(prompt).await? else { return Ok(None) };
            match text.parse::<i64>() {
                Ok(year) => return Ok(Some(year)),
                Err(err) => {
                    debug!(input = text.as_str(), error = %err, "year is not a number");
                    self.say("Invalid year, please enter a number.\n").await?;
                }
            }
        }
    }
}
