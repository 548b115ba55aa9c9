//! The record store: in-memory book list mirrored to a storage backend.
//!
//! [`Catalog`] owns the ordered list of books for the whole session. Adding or
//! removing a book rewrites the backing collection immediately. Field updates
//! only touch memory and are written by the next [`Catalog::persist`] (or the
//! next add/remove, which rewrites everything).

use crate::domain::error::{BookshelfError, Result};
use crate::domain::validation::{validate, ValidationError};
use crate::domain::{Book, BookChange, BookField, BookId};
use crate::storage::backend::Storage;
use std::fmt;

/// Operator-visible outcome of a catalog mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Added(BookId),
    Removed(BookId),
    Updated(BookId),
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(_) => f.write_str("Book added successfully!"),
            Self::Removed(_) => f.write_str("Book removed successfully!"),
            Self::Updated(_) => f.write_str("Book updated successfully!"),
        }
    }
}

/// In-memory catalog backed by a [`Storage`] implementation.
pub struct Catalog {
    storage: Box<dyn Storage>,
    books: Vec<Book>,
}

impl Catalog {
    /// Opens the catalog, creating an empty collection first if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be created, read, or parsed.
    /// Callers treat this as fatal.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookshelf::storage::{Catalog, JsonStorage};
    /// use std::path::PathBuf;
    ///
    /// let catalog = Catalog::open(Box::new(JsonStorage::new(PathBuf::from("data.json"))))?;
    /// println!("{} books", catalog.len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(storage: Box<dyn Storage>) -> Result<Self> {
        storage.ensure_exists()?;
        let books = storage.load_all()?;

        tracing::debug!(count = books.len(), "catalog opened");
        Ok(Self { storage, books })
    }

    /// Reads the collection as currently stored, ignoring unsaved edits.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is unreadable or corrupt.
    pub fn load_all(&self) -> Result<Vec<Book>> {
        self.storage.ensure_exists()?;
        self.storage.load_all()
    }

    /// Books in insertion order, including unsaved edits.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Resolves raw user input as an exact book id.
    ///
    /// The input must spell the id exactly: `"01"` does not open book 1.
    /// Input that is not a valid id, or an id with no book, yields `None`.
    #[must_use]
    pub fn find_by_code(&self, raw: &str) -> Option<&Book> {
        if validate(BookField::Id.as_str(), raw).is_err() {
            return None;
        }
        self.books
            .iter()
            .find(|book| book.field_text(BookField::Id) == raw)
    }

    /// Filters books by `query`, keeping catalog order.
    ///
    /// With `strong` set, a book matches when every requested field contains
    /// `query` case-sensitively. Otherwise it matches when any field contains
    /// it, ignoring case. An empty query matches everything.
    ///
    /// # Errors
    ///
    /// When `fields` is exactly `[BookField::Id]` the query is validated as an
    /// id first, and an invalid id is rejected instead of scanned.
    pub fn search(
        &self,
        query: &str,
        fields: &[BookField],
        strong: bool,
    ) -> std::result::Result<Vec<&Book>, ValidationError> {
        if fields == [BookField::Id] {
            validate(BookField::Id.as_str(), query)?;
        }

        let needle = query.to_lowercase();
        let hits: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| {
                if strong {
                    fields.iter().all(|&f| book.field_text(f).contains(query))
                } else {
                    fields
                        .iter()
                        .any(|&f| book.field_text(f).to_lowercase().contains(&needle))
                }
            })
            .collect();

        tracing::debug!(query = %query, strong, hits = hits.len(), "search complete");
        Ok(hits)
    }

    /// Appends a new available book and writes the collection.
    ///
    /// The id is one more than the largest id in the catalog, or 1 when empty.
    /// Ids of removed books are never handed out again unless they were the
    /// largest.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written, or if the largest
    /// id is already `u32::MAX` and no fresh id is left.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Confirmation> {
        let id = self.next_id()?;
        let book = Book::new(id, title, author, year);

        let _span = tracing::debug_span!("catalog_add", book_id = id, title = %book.title).entered();

        self.books.push(book);
        self.persist()?;

        tracing::info!(book_id = id, "book added");
        Ok(Confirmation::Added(id))
    }

    /// Drops the book with `id`, if any, and writes the collection.
    ///
    /// An unknown id is not an error; the collection is simply rewritten as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    pub fn remove(&mut self, id: BookId) -> Result<Confirmation> {
        let _span = tracing::debug_span!("catalog_remove", book_id = id).entered();

        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        self.persist()?;

        tracing::info!(book_id = id, removed = before != self.books.len(), "book removed");
        Ok(Confirmation::Removed(id))
    }

    /// Edits one field of a stored book in memory only.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::BookNotFound`] if no book has `id`.
    pub fn update(&mut self, id: BookId, change: BookChange) -> Result<Confirmation> {
        let _span =
            tracing::debug_span!("catalog_update", book_id = id, field = change.field().as_str())
                .entered();

        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(BookshelfError::BookNotFound(id))?;
        change.apply(book);

        tracing::info!(book_id = id, "book updated (not yet persisted)");
        Ok(Confirmation::Updated(id))
    }

    /// Overwrites the stored collection with the in-memory list.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    pub fn persist(&self) -> Result<()> {
        self.storage.save_all(&self.books)
    }

    fn next_id(&self) -> Result<BookId> {
        self.books
            .iter()
            .map(|book| book.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| BookshelfError::Storage("id space exhausted".to_string()))
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookStatus;
    use crate::storage::JsonStorage;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    fn open_in(dir: &Path) -> Catalog {
        Catalog::open(Box::new(JsonStorage::new(dir.join("data.json")))).unwrap()
    }

    fn seeded() -> (TempDir, Catalog) {
        let dir = tempdir().unwrap();
        let mut catalog = open_in(dir.path());
        catalog.add("The Hobbit", "J. R. R. Tolkien", "1937").unwrap();
        catalog.add("Dune", "Frank Herbert", "1965").unwrap();
        catalog.add("Neuromancer", "William Gibson", "1984").unwrap();
        (dir, catalog)
    }

    #[test]
    fn open_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path: PathBuf = dir.path().join("data.json");
        let catalog = open_in(dir.path());

        assert!(catalog.is_empty());
        assert!(path.exists());
        assert!(catalog.load_all().unwrap().is_empty());
    }

    #[test]
    fn add_to_empty_catalog_assigns_id_one() {
        let dir = tempdir().unwrap();
        let mut catalog = open_in(dir.path());

        let confirmation = catalog.add("Valid Title", "Valid Author", "2023").unwrap();
        assert_eq!(confirmation, Confirmation::Added(1));
        assert_eq!(confirmation.to_string(), "Book added successfully!");

        let stored = catalog.load_all().unwrap();
        assert_eq!(stored, vec![Book::new(1, "Valid Title", "Valid Author", "2023")]);
        assert_eq!(stored[0].status, BookStatus::Available);
    }

    #[test]
    fn add_refuses_to_reuse_the_largest_id() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("data.json"));
        storage
            .save_all(&[Book::new(BookId::MAX, "Last Book", "Someone", "2000")])
            .unwrap();
        let mut catalog = Catalog::open(Box::new(storage)).unwrap();

        let err = catalog.add("New Book", "Someone", "2000").unwrap_err();

        assert!(matches!(err, BookshelfError::Storage(_)));
        let ids: Vec<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BookId::MAX]);
        assert_eq!(catalog.load_all().unwrap().len(), 1);
    }

    #[test]
    fn ids_follow_the_largest_and_leave_gaps() {
        let (_dir, mut catalog) = seeded();

        catalog.remove(2).unwrap();
        catalog.add("Solaris", "Stanislaw Lem", "1961").unwrap();
        let ids: Vec<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        catalog.remove(4).unwrap();
        catalog.add("Foundation", "Isaac Asimov", "1951").unwrap();
        let ids: Vec<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn remove_last_book_empties_the_file() {
        let dir = tempdir().unwrap();
        let mut catalog = open_in(dir.path());
        catalog.add("Valid Title", "Valid Author", "2023").unwrap();

        catalog.remove(1).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.load_all().unwrap().is_empty());
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let (_dir, mut catalog) = seeded();
        let before = catalog.books().to_vec();

        let confirmation = catalog.remove(99).unwrap();
        assert_eq!(confirmation, Confirmation::Removed(99));
        assert_eq!(catalog.books(), before.as_slice());
        assert_eq!(catalog.load_all().unwrap(), before);
    }

    #[test]
    fn update_stays_in_memory_until_persist() {
        let (_dir, mut catalog) = seeded();

        catalog.update(2, BookChange::Status(BookStatus::CheckedOut)).unwrap();
        assert_eq!(catalog.get(2).unwrap().status, BookStatus::CheckedOut);
        assert_eq!(catalog.load_all().unwrap()[1].status, BookStatus::Available);

        catalog.persist().unwrap();
        assert_eq!(catalog.load_all().unwrap()[1].status, BookStatus::CheckedOut);
    }

    #[test]
    fn update_unknown_id_is_an_error() {
        let (_dir, mut catalog) = seeded();
        let err = catalog.update(42, BookChange::Title("Nope".into())).unwrap_err();
        assert!(matches!(err, BookshelfError::BookNotFound(42)));
    }

    #[test]
    fn persist_is_idempotent_and_round_trips() {
        let (dir, mut catalog) = seeded();
        catalog.update(1, BookChange::Year("1938".into())).unwrap();

        catalog.persist().unwrap();
        let first = std::fs::read(dir.path().join("data.json")).unwrap();
        catalog.persist().unwrap();
        let second = std::fs::read(dir.path().join("data.json")).unwrap();

        assert_eq!(first, second);
        assert_eq!(catalog.load_all().unwrap(), catalog.books());

        let reopened = open_in(dir.path());
        assert_eq!(reopened.books(), catalog.books());
    }

    #[test]
    fn id_search_rejects_invalid_ids() {
        let (_dir, catalog) = seeded();
        for query in ["abc", "0", "-1", "", "1.5"] {
            assert!(catalog.search(query, &[BookField::Id], true).is_err(), "{query}");
        }
        assert!(catalog.search("7", &[BookField::Id], true).unwrap().is_empty());
    }

    #[test]
    fn strong_search_is_case_sensitive_on_every_field() {
        let (_dir, catalog) = seeded();

        let hits = catalog.search("Dune", &[BookField::Title], true).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(catalog.search("dune", &[BookField::Title], true).unwrap().is_empty());

        let hits = catalog
            .search("i", &[BookField::Title, BookField::Author], true)
            .unwrap();
        let ids: Vec<BookId> = hits.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1]);

        assert!(catalog
            .search("Hobbit", &[BookField::Title, BookField::Author], true)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn loose_search_matches_any_field_ignoring_case() {
        let (_dir, catalog) = seeded();

        let hits = catalog.search("GIBSON", &BookField::TEXT, false).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);

        let hits = catalog.search("19", &BookField::TEXT, false).unwrap();
        assert_eq!(hits.len(), 3);

        assert!(catalog.search("tolstoy", &BookField::TEXT, false).unwrap().is_empty());
    }

    #[test]
    fn empty_query_matches_every_book() {
        let (_dir, catalog) = seeded();
        let hits = catalog.search("", &BookField::TEXT, false).unwrap();
        assert_eq!(hits.len(), catalog.len());
    }

    #[test]
    fn find_by_code_is_exact() {
        let dir = tempdir().unwrap();
        let mut catalog = open_in(dir.path());
        for n in 0..11 {
            catalog.add(format!("Title {n}"), "Author", "2000").unwrap();
        }
        catalog.remove(1).unwrap();

        assert!(catalog.find_by_code("1").is_none());
        assert_eq!(catalog.find_by_code("11").unwrap().id, 11);
        assert!(catalog.find_by_code("x").is_none());
        assert!(catalog.find_by_code("0").is_none());
        assert!(catalog.find_by_code("011").is_none());
    }
}
