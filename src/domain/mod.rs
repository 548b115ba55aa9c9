//! Domain layer for the bookshelf catalog.
//!
//! This module contains the core domain types independent of storage and
//! console concerns.
//!
//! # Organization
//!
//! - [`book`]: Book record, lending status, field names
//! - [`error`]: Error types and result aliases
//! - [`validation`]: Form field validation rules
//!
//! # Examples
//!
//! ```
//! use bookshelf::domain::{validate, Book, Result};
//!
//! fn create_book() -> Result<Book> {
//!     Ok(Book::new(1, "Valid Title", "Valid Author", "2023"))
//! }
//!
//! assert!(validate("title", "Valid Title").is_ok());
//! assert_eq!(create_book().unwrap().id, 1);
//! ```

pub mod book;
pub mod error;
pub mod validation;

pub use book::{Book, BookChange, BookField, BookId, BookStatus};
pub use error::{BookshelfError, Result};
pub use validation::{validate, ValidationError};
