//! Input handling and state transition logic.
//!
//! Each page maps one line of user input to a [`Transition`]. Pages that don't
//! recognise the input fall back to the shared link dispatch: a registered page
//! code opens that page, anything else prints an error and redraws the current
//! page with the same payload.
//!
//! Page-specific rules:
//!
//! - **Catalog**: input naming an existing book id opens that book.
//! - **Search**: the first line is the query. Results are shown, then a second
//!   line is read and treated like catalog input.
//! - **Book detail**: `u` changes status, `r` asks to remove.
//! - **Update status**: `1` and `2` set a status and return to the book; any
//!   other input is dropped silently and the page keeps waiting.
//! - **Remove**: `1` removes the book. Every answer returns to the catalog.
//! - **Add book**: input is form data for a specific field, never navigation
//!   (see [`Router::handle_form_input`]).
//!
//! # Example
//!
//! ```no_run
//! use bookshelf::app::{PageKind, Router, RouterOptions, ScriptedConsole, Transition};
//! use bookshelf::storage::{Catalog, JsonStorage};
//! use std::path::PathBuf;
//!
//! let catalog = Catalog::open(Box::new(JsonStorage::new(PathBuf::from("data.json"))))?;
//! let mut router = Router::new(catalog, ScriptedConsole::default(), RouterOptions::headless());
//! let next = router.handle_input(PageKind::Home, "c", None)?;
//! assert_eq!(next, Transition::to(PageKind::Catalog));
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

use crate::app::actions::Transition;
use crate::app::console::Console;
use crate::app::form::{FormField, FormSession};
use crate::app::pages::PageKind;
use crate::app::router::{Router, RouterMode, INPUT_PROMPT};
use crate::domain::error::Result;
use crate::domain::validation::validate;
use crate::domain::{BookChange, BookField, BookId, BookStatus};
use crate::ui;

/// Message shown when input matches nothing on the current page.
pub const INVALID_INPUT: &str = "--- Invalid input ---";

impl<C: Console> Router<C> {
    /// Maps one line of input on `page` to the next transition.
    ///
    /// Mutations (status changes, removals) happen here, before the transition
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns console or storage errors, and payload errors for book pages
    /// reached without a valid book.
    pub fn handle_input(
        &mut self,
        page: PageKind,
        raw: &str,
        payload: Option<BookId>,
    ) -> Result<Transition> {
        let _span = tracing::debug_span!("handle_input", page = page.code(), input = %raw).entered();

        match page {
            PageKind::Catalog => self.open_book_or_dispatch(raw),
            PageKind::Search => self.handle_search(raw),
            PageKind::BookDetail => {
                let id = self.payload_book(page, payload)?.id;
                match raw {
                    "u" => Ok(Transition::to_book(PageKind::UpdateStatus, id)),
                    "r" => Ok(Transition::to_book(PageKind::RemoveConfirm, id)),
                    _ => self.dispatch_link(raw),
                }
            }
            PageKind::UpdateStatus => {
                let id = self.payload_book(page, payload)?.id;
                let status = match raw {
                    "1" => BookStatus::Available,
                    "2" => BookStatus::CheckedOut,
                    _ => {
                        tracing::debug!(input = %raw, "status input ignored");
                        return Ok(Transition::Ignored);
                    }
                };
                let confirmation = self.catalog.update(id, BookChange::Status(status))?;
                self.confirm(confirmation)?;
                Ok(Transition::to_book(PageKind::BookDetail, id))
            }
            PageKind::RemoveConfirm => {
                let id = self.payload_book(page, payload)?.id;
                if raw == "1" {
                    let confirmation = self.catalog.remove(id)?;
                    self.confirm(confirmation)?;
                } else {
                    tracing::debug!(book_id = id, "removal cancelled");
                }
                Ok(Transition::to(PageKind::Catalog))
            }
            PageKind::AddBook => {
                // Form values arrive through handle_form_input with their field.
                tracing::debug!("add book input outside the form ignored");
                Ok(Transition::Rerender)
            }
            PageKind::Exit => self.exit(),
            PageKind::Home => self.dispatch_link(raw),
        }
    }

    /// Shared fallback: open a registered page, or complain and redraw.
    ///
    /// Book pages are only reachable with a book, so typing their codes here
    /// counts as invalid input.
    ///
    /// # Errors
    ///
    /// Returns console errors.
    pub fn dispatch_link(&mut self, raw: &str) -> Result<Transition> {
        match self.lookup(raw) {
            Some(target) if !target.requires_payload() => Ok(Transition::to(target)),
            _ => {
                tracing::debug!(input = %raw, "navigation miss");
                self.console.write_line("")?;
                self.console.write_line(INVALID_INPUT)?;
                self.pause();
                Ok(Transition::Rerender)
            }
        }
    }

    fn open_book_or_dispatch(&mut self, raw: &str) -> Result<Transition> {
        match self.catalog.find_by_code(raw).map(|book| book.id) {
            Some(id) => Ok(Transition::to_book(PageKind::BookDetail, id)),
            None => self.dispatch_link(raw),
        }
    }

    fn handle_search(&mut self, query: &str) -> Result<Transition> {
        let results = ui::components::render_header(&ui::HeaderInfo {
            title: format!("Search results: [{query}]"),
        });
        self.console.write_lines(&results)?;

        let lines = match self.catalog.search(query, &BookField::TEXT, false) {
            Ok(hits) if !hits.is_empty() => {
                let mut lines = vec!["Enter the id of the book you want to open:".to_string()];
                lines.extend(ui::components::render_book_list(hits));
                lines
            }
            _ => vec!["Nothing found. Try another search.".to_string()],
        };
        self.console.write_lines(&lines)?;
        self.display_menu(PageKind::Search, None)?;

        match self.console.read_line(INPUT_PROMPT)? {
            Some(next) => self.open_book_or_dispatch(&next),
            None => self.exit(),
        }
    }

    /// Runs the add-book form: asks each field until it validates, then adds
    /// the book and returns to the catalog.
    ///
    /// # Errors
    ///
    /// Returns console or storage errors.
    pub fn run_add_book_form(&mut self) -> Result<Transition> {
        self.display_content(PageKind::AddBook, None)?;

        let mut form = FormSession::new();
        while let Some(field) = form.next_missing() {
            self.console.write_line(field.prompt())?;
            let Some(raw) = self.console.read_line(INPUT_PROMPT)? else {
                tracing::info!("input closed during add book form");
                return self.exit();
            };
            if let Some(transition) = self.handle_form_input(&mut form, field, &raw)? {
                return Ok(transition);
            }
        }

        Ok(Transition::to(PageKind::Catalog))
    }

    /// Applies one form answer for `field`.
    ///
    /// A rejected value prints the validation message and leaves the field
    /// empty. Once every field is filled the book is added and `Some` redirect
    /// to the catalog is returned. In interactive mode the form is cleared
    /// afterwards; headless runs keep the values.
    ///
    /// # Errors
    ///
    /// Returns console errors, or a storage error if the book cannot be saved.
    pub fn handle_form_input(
        &mut self,
        form: &mut FormSession,
        field: FormField,
        raw: &str,
    ) -> Result<Option<Transition>> {
        match validate(field.as_str(), raw) {
            Ok(()) => {
                form.set(field, raw);
                self.console.write_line("")?;
            }
            Err(e) => {
                tracing::debug!(field = field.as_str(), error = %e, "form value rejected");
                self.console.write_line("")?;
                self.console.write_line(&e.to_string())?;
                self.console.write_line("")?;
            }
        }

        let Some((title, author, year)) = form.values() else {
            return Ok(None);
        };

        let confirmation = self
            .catalog
            .add(title.to_string(), author.to_string(), year.to_string())?;
        self.confirm(confirmation)?;

        if self.options.mode == RouterMode::Interactive {
            form.clear();
        }

        Ok(Some(Transition::to(PageKind::Catalog)))
    }
}
