//! Page registry and navigation loop.
//!
//! The [`Router`] owns the catalog for the whole session, the console, and the
//! registry of pages keyed by their short codes. Rendering a page shows its
//! content and menu, blocks for one line of input, and hands that line to the
//! page's input handler (see `handler.rs`), which answers with a
//! [`Transition`]. The navigation loop then renders whatever comes next until
//! the exit page ends the session.
//!
//! # Example
//!
//! ```no_run
//! use bookshelf::app::{Router, RouterOptions, StdConsole};
//! use bookshelf::storage::{Catalog, JsonStorage};
//! use std::path::PathBuf;
//!
//! let catalog = Catalog::open(Box::new(JsonStorage::new(PathBuf::from("data.json"))))?;
//! let mut router = Router::new(catalog, StdConsole::new(), RouterOptions::default());
//! router.start()?;
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

use crate::app::actions::Transition;
use crate::app::console::Console;
use crate::app::pages::PageKind;
use crate::domain::error::{BookshelfError, Result};
use crate::domain::BookId;
use crate::storage::{Catalog, Confirmation};
use crate::ui;
use std::time::Duration;

/// Prompt shown whenever the router waits for input.
pub const INPUT_PROMPT: &str = "\n-Your input: ";

/// Default pause after an operator message.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// Whether the router is driven by a person or by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterMode {
    /// Normal terminal session.
    Interactive,

    /// Non-interactive use. Finished add-book forms keep their values for
    /// inspection instead of being cleared.
    Headless,
}

/// Tunables for a [`Router`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    pub mode: RouterMode,

    /// How long operator messages stay up before the next page is drawn.
    /// Zero disables the pause.
    pub pause: Duration,
}

impl RouterOptions {
    /// Options for tests and scripted runs: headless, no pauses.
    #[must_use]
    pub const fn headless() -> Self {
        Self {
            mode: RouterMode::Headless,
            pause: Duration::ZERO,
        }
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            mode: RouterMode::Interactive,
            pause: DEFAULT_PAUSE,
        }
    }
}

/// Session-wide navigation state.
pub struct Router<C: Console> {
    pub(crate) catalog: Catalog,
    pub(crate) console: C,
    pub(crate) options: RouterOptions,
    pages: Vec<PageKind>,
}

impl<C: Console> Router<C> {
    /// Builds the router and its page registry. Nothing is rendered until
    /// [`Router::start`] or [`Router::redirect`] is called.
    pub fn new(catalog: Catalog, console: C, options: RouterOptions) -> Self {
        let mut router = Self {
            catalog,
            console,
            options,
            pages: Vec::with_capacity(PageKind::ALL.len()),
        };
        router.register_defaults();
        router
    }

    fn register_defaults(&mut self) {
        for page in PageKind::ALL {
            self.register(page);
        }
        tracing::debug!(pages = self.pages.len(), "page registry built");
    }

    fn register(&mut self, page: PageKind) {
        if !self.pages.contains(&page) {
            self.pages.push(page);
        }
    }

    /// Registered pages in registration order.
    #[must_use]
    pub fn pages(&self) -> &[PageKind] {
        &self.pages
    }

    /// Finds the registered page for a typed code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<PageKind> {
        self.pages.iter().copied().find(|page| page.code() == code)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs a session from the home page until the user exits.
    ///
    /// # Errors
    ///
    /// Returns storage, console, or navigation errors. All of them end the
    /// session.
    pub fn start(&mut self) -> Result<()> {
        self.redirect(PageKind::Home.code(), None)
    }

    /// Opens the page registered under `code` and keeps navigating from there
    /// until the exit page is reached.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::UnknownPage`] if `code` is not registered,
    /// plus anything the pages themselves fail with.
    pub fn redirect(&mut self, code: &str, payload: Option<BookId>) -> Result<()> {
        let page = self
            .lookup(code)
            .ok_or_else(|| BookshelfError::UnknownPage(code.to_string()))?;
        self.navigate(page, payload)
    }

    fn navigate(&mut self, mut page: PageKind, mut payload: Option<BookId>) -> Result<()> {
        let mut transition = self.render(page, payload)?;
        loop {
            tracing::debug!(page = page.code(), ?transition, "transition");
            transition = match transition {
                Transition::Redirect { to, payload: next } => {
                    if self.lookup(to.code()).is_none() {
                        return Err(BookshelfError::UnknownPage(to.code().to_string()));
                    }
                    page = to;
                    payload = next;
                    self.render(page, payload)?
                }
                Transition::Rerender => self.render(page, payload)?,
                Transition::Ignored => self.await_input(page, payload)?,
                Transition::Exit => return Ok(()),
            };
        }
    }

    /// One render cycle: content, menu, one line of input, dispatch.
    ///
    /// The add-book page runs its own form loop instead, and the exit page
    /// never asks for input.
    ///
    /// # Errors
    ///
    /// Returns console or storage errors, or a missing-payload error for book
    /// pages rendered without a book.
    pub fn render(&mut self, page: PageKind, payload: Option<BookId>) -> Result<Transition> {
        let _span = tracing::debug_span!("render", page = page.code(), ?payload).entered();

        match page {
            PageKind::Exit => self.exit(),
            PageKind::AddBook => self.run_add_book_form(),
            _ => {
                let view = self.page_view(page, payload)?;
                self.console.write_lines(&ui::render(&view))?;
                self.await_input(page, payload)
            }
        }
    }

    /// Writes the page header and body.
    ///
    /// # Errors
    ///
    /// Returns console errors, or a payload error for book pages.
    pub fn display_content(&mut self, page: PageKind, payload: Option<BookId>) -> Result<()> {
        let view = self.page_view(page, payload)?;
        self.console.write_lines(&ui::render_content(&view))?;
        Ok(())
    }

    /// Writes the page's link menu, if it has links.
    ///
    /// # Errors
    ///
    /// Returns console errors, or a payload error for book pages.
    pub fn display_menu(&mut self, page: PageKind, payload: Option<BookId>) -> Result<()> {
        let view = self.page_view(page, payload)?;
        self.console.write_lines(&ui::render_menu(&view))?;
        Ok(())
    }

    /// Blocks for one line and dispatches it. End of input exits.
    pub(crate) fn await_input(&mut self, page: PageKind, payload: Option<BookId>) -> Result<Transition> {
        match self.console.read_line(INPUT_PROMPT)? {
            Some(raw) => self.handle_input(page, &raw, payload),
            None => {
                tracing::info!(page = page.code(), "input closed, exiting");
                self.exit()
            }
        }
    }

    /// The exit page: persist everything, say goodbye, end the session.
    pub(crate) fn exit(&mut self) -> Result<Transition> {
        self.catalog.persist()?;
        let view = self.page_view(PageKind::Exit, None)?;
        self.console.write_lines(&ui::render_content(&view))?;

        tracing::info!(books = self.catalog.len(), "catalog saved, session finished");
        Ok(Transition::Exit)
    }

    /// Shows an operator message and waits for the configured pause.
    pub(crate) fn confirm(&mut self, confirmation: Confirmation) -> Result<()> {
        self.console.write_line(&confirmation.to_string())?;
        self.pause();
        Ok(())
    }

    pub(crate) fn pause(&self) {
        if !self.options.pause.is_zero() {
            std::thread::sleep(self.options.pause);
        }
    }
}

impl<C: Console> std::fmt::Debug for Router<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("catalog", &self.catalog)
            .field("options", &self.options)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}
