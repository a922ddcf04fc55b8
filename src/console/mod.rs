//! Interactive command loop
//!
//! Reads menu selections and free-text fields from any `BufRead`, dispatches
//! them to the [`Catalog`] and renders the returned reports to any `Write`.

pub mod menu;

use std::io::{BufRead, Write};

use crate::{
    error::AppResult,
    models::Book,
    repository::BookStore,
    services::Catalog,
};

pub use menu::{MenuChoice, MENU};

/// What the loop should do after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
    InputClosed,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user confirms exit or input runs out.
    ///
    /// The catalog is saved to `store` on confirmed exit only.
    pub fn run(&mut self, catalog: &mut Catalog, store: &dyn BookStore) -> AppResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("please choose an option: ")? else {
                return self.input_closed();
            };
            writeln!(self.output)?;

            let step = match MenuChoice::from_input(&choice) {
                Some(choice) => self.dispatch(choice, catalog, store)?,
                None => {
                    tracing::debug!(%choice, "Invalid menu choice");
                    writeln!(self.output, "Invalid choice")?;
                    Step::Continue
                }
            };

            match step {
                Step::Continue => {}
                Step::Exit => return Ok(()),
                Step::InputClosed => return self.input_closed(),
            }
        }
    }

    fn dispatch(
        &mut self,
        choice: MenuChoice,
        catalog: &mut Catalog,
        store: &dyn BookStore,
    ) -> AppResult<Step> {
        match choice {
            MenuChoice::AddBook => {
                let Some(title) = self.prompt("Book title: ")? else {
                    return Ok(Step::InputClosed);
                };
                let Some(author) = self.prompt("Author: ")? else {
                    return Ok(Step::InputClosed);
                };
                let book = catalog.add(Book::new(title, author));
                writeln!(self.output, "{} is added to library", book.title())?;
            }
            MenuChoice::BorrowBook => {
                let Some(title) = self.prompt("Book title: ")? else {
                    return Ok(Step::InputClosed);
                };
                writeln!(self.output, "{}", catalog.borrow(&title))?;
            }
            MenuChoice::ReturnBook => {
                let Some(title) = self.prompt("Book title: ")? else {
                    return Ok(Step::InputClosed);
                };
                writeln!(self.output, "{}", catalog.return_book(&title))?;
            }
            MenuChoice::ListBooks => {
                self.print_books(catalog.list_all(), "No books in library")?;
            }
            MenuChoice::ListAvailable => {
                self.print_books(catalog.list_available(), "No available books")?;
            }
            MenuChoice::ListBorrowed => {
                self.print_books(catalog.list_borrowed(), "No borrowed books")?;
            }
            MenuChoice::FindByAuthor => {
                let Some(author) = self.prompt("Book author: ")? else {
                    return Ok(Step::InputClosed);
                };
                let matches = catalog.find_by_author(&author);
                self.print_books(matches, &format!("No books found by '{}'.", author))?;
            }
            MenuChoice::Exit => {
                let Some(confirm) = self.prompt("Are you sure you want to exit (y/n): ")? else {
                    return Ok(Step::InputClosed);
                };
                if confirm.to_lowercase() == "y" {
                    let report = catalog.save(store)?;
                    writeln!(self.output, "{}", report)?;
                    writeln!(self.output, "exiting app")?;
                    return Ok(Step::Exit);
                }
            }
        }
        Ok(Step::Continue)
    }

    /// Print a label and read one trimmed line; `None` once input is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn print_books<'a>(
        &mut self,
        books: impl IntoIterator<Item = &'a Book>,
        empty_message: &str,
    ) -> AppResult<()> {
        let mut any = false;
        for book in books {
            writeln!(self.output, "{}", book)?;
            any = true;
        }
        if !any {
            writeln!(self.output, "{}", empty_message)?;
        }
        Ok(())
    }

    fn input_closed(&mut self) -> AppResult<()> {
        tracing::warn!("Input closed before exit was confirmed, changes not saved");
        writeln!(self.output)?;
        Ok(())
    }
}
