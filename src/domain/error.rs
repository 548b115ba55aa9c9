//! Error types for the bookshelf catalog.
//!
//! This module defines the centralized error type [`BookshelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Form validation failures are deliberately not part of this enum: they are
//! recovered locally by re-prompting and live in [`crate::domain::validation`].

use thiserror::Error;

/// The main error type for catalog and navigation operations.
///
/// Every variant except `Io` describes a condition the interactive session cannot
/// recover from on its own. Storage corruption at startup, a redirect to an
/// unknown page, or a page reached without its payload all terminate the run.
///
/// # Examples
///
/// ```
/// use bookshelf::BookshelfError;
///
/// fn open_collection() -> Result<(), BookshelfError> {
///     Err(BookshelfError::Storage("failed to parse JSON".to_string()))
/// }
///
/// assert!(open_collection().is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// Storage operation failed.
    ///
    /// Occurs when the backing collection cannot be parsed or serialized.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or console I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// Occurs when the configuration file exists but cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A redirect named a code that is not in the page registry.
    #[error("Unknown page code: {0}")]
    UnknownPage(String),

    /// A page that needs a book was entered without one.
    #[error("Page '{0}' requires a book payload")]
    MissingPayload(&'static str),

    /// A payload referred to a book that is no longer in the catalog.
    #[error("Book {0} not found")]
    BookNotFound(u32),
}

/// A specialized `Result` type for bookshelf operations.
///
/// This is a type alias for `std::result::Result<T, BookshelfError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, BookshelfError>;
