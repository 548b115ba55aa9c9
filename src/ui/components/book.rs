//! Book list and detail renderers.

use crate::domain::Book;

/// One line per book, in the order given.
#[must_use]
pub fn render_book_list<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<String> {
    books.into_iter().map(ToString::to_string).collect()
}

/// Labelled fields of a single book.
#[must_use]
pub fn render_book_detail(book: &Book) -> Vec<String> {
    book.detail_lines()
}
