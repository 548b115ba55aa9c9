//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over the place the
//! book collection is persisted. The catalog only ever reads or writes the whole
//! collection, so the trait is just that: make sure it exists, read it all,
//! overwrite it all.

use crate::domain::error::Result;
use crate::domain::Book;

/// Abstraction over the persisted book collection.
///
/// # Implementations
///
/// - [`crate::storage::JsonStorage`]: single pretty-printed JSON file (default)
///
/// # Examples
///
/// ```no_run
/// use bookshelf::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let storage = JsonStorage::new(PathBuf::from("/tmp/data.json"));
/// storage.ensure_exists()?;
/// let books = storage.load_all()?;
/// storage.save_all(&books)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Creates an empty collection if none is stored yet.
    ///
    /// Must be idempotent: an existing collection is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty collection cannot be written.
    fn ensure_exists(&self) -> Result<()>;

    /// Reads the entire stored collection in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is unreadable or corrupt.
    fn load_all(&self) -> Result<Vec<Book>>;

    /// Replaces the stored collection with `books`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save_all(&self, books: &[Book]) -> Result<()>;
}
