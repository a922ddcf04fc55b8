//! Catalog management service

use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{Book, LoadReport, LoanReport, SaveReport},
    repository::BookStore,
};

/// Indentation used in the persisted file
const INDENT: &[u8] = b"    ";

/// Ordered collection of every book in the library.
///
/// Titles are not unique. Lookups by title scan in insertion order and act on
/// the first match only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book and hand back a reference to it
    pub fn add(&mut self, book: Book) -> &Book {
        tracing::info!(title = book.title(), author = book.author(), "Book added");
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    /// Every book, in insertion order
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn list_available(&self) -> Vec<&Book> {
        self.books.iter().filter(|b| !b.is_borrowed()).collect()
    }

    pub fn list_borrowed(&self) -> Vec<&Book> {
        self.books.iter().filter(|b| b.is_borrowed()).collect()
    }

    /// Books whose author matches exactly, ignoring case
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.has_author(author)).collect()
    }

    pub fn borrow(&mut self, title: &str) -> LoanReport {
        let report = match self.first_with_title(title) {
            Some(book) => {
                let outcome = book.borrow();
                LoanReport::from_borrow(book.title(), outcome)
            }
            None => LoanReport::NotFound(title.to_string()),
        };
        tracing::info!(title, ?report, "Borrow requested");
        report
    }

    pub fn return_book(&mut self, title: &str) -> LoanReport {
        let report = match self.first_with_title(title) {
            Some(book) => {
                let outcome = book.return_book();
                LoanReport::from_return(book.title(), outcome)
            }
            None => LoanReport::NotFound(title.to_string()),
        };
        tracing::info!(title, ?report, "Return requested");
        report
    }

    /// Append every book found in the store.
    ///
    /// A missing, empty or blank snapshot leaves the catalog untouched. Content
    /// that does not parse fails without appending anything.
    pub fn load(&mut self, store: &dyn BookStore) -> AppResult<LoadReport> {
        let contents = match store.read()? {
            Some(contents) if !contents.iter().all(u8::is_ascii_whitespace) => contents,
            _ => {
                tracing::info!("No library data to load");
                return Ok(LoadReport::NoData);
            }
        };

        let loaded: Vec<Book> = serde_json::from_slice(&contents).map_err(|e| {
            tracing::error!(error = %e, "Library data is malformed");
            AppError::MalformedData(e)
        })?;

        let count = loaded.len();
        self.books.extend(loaded);
        tracing::info!(count, total = self.books.len(), "Library loaded");
        Ok(LoadReport::Loaded(count))
    }

    /// Write every book to the store, replacing what was there.
    ///
    /// An empty catalog writes nothing.
    pub fn save(&self, store: &dyn BookStore) -> AppResult<SaveReport> {
        if self.books.is_empty() {
            tracing::info!("Catalog is empty, nothing to save");
            return Ok(SaveReport::NothingToSave);
        }

        let contents = self.to_json()?;
        store.write(&contents)?;
        tracing::info!(count = self.books.len(), "Library saved");
        Ok(SaveReport::Saved(self.books.len()))
    }

    fn first_with_title(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.has_title(title))
    }

    fn to_json(&self) -> AppResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.books
            .serialize(&mut serializer)
            .map_err(AppError::Serialization)?;
        String::from_utf8(buf)
            .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
