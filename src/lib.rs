//! Bookshelf
//!
//! A small library's book inventory: add books, borrow and return them, list
//! them by status or author, and keep the whole catalog in a JSON file
//! between runs.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::Book;
pub use services::Catalog;
