//! Transitions produced by page input handling.
//!
//! Handling one line of input never recurses into the next page. It returns a
//! [`Transition`] and the router's navigation loop carries it out, so a long
//! session does not grow the call stack.

use crate::app::pages::PageKind;
use crate::domain::BookId;

/// What the router does after a page has handled its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Render another page, optionally for a specific book.
    Redirect {
        to: PageKind,
        payload: Option<BookId>,
    },

    /// Render the same page again with the same payload.
    ///
    /// Used after a navigation miss, once the error has been shown.
    Rerender,

    /// Discard the input and wait for another line without redrawing.
    Ignored,

    /// The session is over. Returned only by the exit page.
    Exit,
}

impl Transition {
    /// Redirect to a page that needs no payload.
    #[must_use]
    pub const fn to(page: PageKind) -> Self {
        Self::Redirect { to: page, payload: None }
    }

    /// Redirect to a page about a specific book.
    #[must_use]
    pub const fn to_book(page: PageKind, id: BookId) -> Self {
        Self::Redirect { to: page, payload: Some(id) }
    }
}
