//! Data models for Bookshelf

pub mod book;
pub mod report;

// Re-export commonly used types
pub use book::{Book, BorrowOutcome, ReturnOutcome};
pub use report::{LoadReport, LoanReport, SaveReport};
