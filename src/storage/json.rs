//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # File Format
//!
//! A top-level array of book objects, indented with four spaces. Non-ASCII
//! text is written as-is rather than `\u` escaped.
//!
//! ```json
//! [
//!     {
//!         "id": 1,
//!         "title": "Valid Title",
//!         "author": "Valid Author",
//!         "year": "2023",
//!         "status": "Available"
//!     }
//! ]
//! ```

use crate::domain::error::{BookshelfError, Result};
use crate::domain::Book;
use crate::storage::backend::Storage;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::PathBuf;

/// Indentation used for the data file.
const INDENT: &[u8] = b"    ";

/// JSON file storage backend.
///
/// Holds only the file location; the in-memory copy of the collection is owned
/// by [`crate::storage::Catalog`].
#[derive(Debug, Clone)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates a backend for the given file. Nothing is touched on disk yet.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Serializes books as an indented JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (should never happen with valid data).
    fn to_pretty_json(books: &[Book]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        books
            .serialize(&mut serializer)
            .map_err(|e| BookshelfError::Storage(format!("failed to serialize JSON: {e}")))?;
        Ok(buf)
    }

    /// Writes bytes to a temporary sibling and renames it over the data file.
    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, bytes)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn ensure_exists(&self) -> Result<()> {
        if self.file_path.exists() {
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "creating empty data file");
        self.write_atomic(&Self::to_pretty_json(&[])?)
    }

    fn load_all(&self) -> Result<Vec<Book>> {
        let _span = tracing::debug_span!("json_load_all", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let books: Vec<Book> = serde_json::from_str(&contents)
            .map_err(|e| BookshelfError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(count = books.len(), "loaded books");
        Ok(books)
    }

    fn save_all(&self, books: &[Book]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_all", count = books.len()).entered();

        let json = Self::to_pretty_json(books)?;
        self.write_atomic(&json)?;

        tracing::debug!("storage saved successfully");
        Ok(())
    }
}
