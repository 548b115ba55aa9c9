//! Book domain model.
//!
//! This module defines the [`Book`] record kept in the catalog, its lending
//! [`BookStatus`], and the [`BookField`] names used by search and updates.
//! The serde layout of [`Book`] is the on-disk record format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a book. Always greater than zero once assigned.
pub type BookId = u32;

/// Lending state of a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    /// On the shelf. New books start here.
    #[default]
    #[serde(rename = "Available")]
    Available,

    /// Lent out to a reader.
    #[serde(rename = "Checked Out")]
    CheckedOut,
}

impl BookStatus {
    /// Label used both on screen and in the data file.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::CheckedOut => "Checked Out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single record in the catalog.
///
/// Field order here is the order written to disk; `year` is kept as the
/// validated string the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: String,
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    /// Creates an available book with the given id.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::domain::{Book, BookStatus};
    ///
    /// let book = Book::new(1, "Valid Title", "Valid Author", "2023");
    /// assert_eq!(book.status, BookStatus::Available);
    /// assert_eq!(book.to_string(), "1. Valid Title, Valid Author, 2023, Available");
    /// ```
    #[must_use]
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: year.into(),
            status: BookStatus::Available,
        }
    }

    /// String form of one field, as compared by catalog search.
    #[must_use]
    pub fn field_text(&self, field: BookField) -> String {
        match field {
            BookField::Id => self.id.to_string(),
            BookField::Title => self.title.clone(),
            BookField::Author => self.author.clone(),
            BookField::Year => self.year.clone(),
            BookField::Status => self.status.label().to_string(),
        }
    }

    /// Multi-line labelled form shown on the detail page.
    #[must_use]
    pub fn detail_lines(&self) -> Vec<String> {
        vec![
            format!(" id: {}", self.id),
            format!(" Title: {}", self.title),
            format!(" Author: {}", self.author),
            format!(" Year: {}", self.year),
            format!(" Status: {}", self.status),
        ]
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}, {}, {}, {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Names of the searchable and updatable fields of a [`Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Id,
    Title,
    Author,
    Year,
    Status,
}

impl BookField {
    /// Fields matched by the free-text search page.
    pub const TEXT: [Self; 3] = [Self::Title, Self::Author, Self::Year];

    /// Field name as understood by [`crate::domain::validation::validate`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
            Self::Status => "status",
        }
    }
}

/// A single in-place edit of a stored book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookChange {
    Title(String),
    Author(String),
    Year(String),
    Status(BookStatus),
}

impl BookChange {
    /// The field this change writes to.
    #[must_use]
    pub const fn field(&self) -> BookField {
        match self {
            Self::Title(_) => BookField::Title,
            Self::Author(_) => BookField::Author,
            Self::Year(_) => BookField::Year,
            Self::Status(_) => BookField::Status,
        }
    }

    pub(crate) fn apply(self, book: &mut Book) {
        match self {
            Self::Title(title) => book.title = title,
            Self::Author(author) => book.author = author,
            Self::Year(year) => book.year = year,
            Self::Status(status) => book.status = status,
        }
    }
}
