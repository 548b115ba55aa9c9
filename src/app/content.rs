//! Page content: what each page shows before it asks for input.

use crate::app::console::Console;
use crate::app::pages::PageKind;
use crate::app::router::Router;
use crate::domain::error::{BookshelfError, Result};
use crate::domain::{Book, BookId, BookStatus};
use crate::ui::components::{render_book_detail, render_book_list};
use crate::ui::{EmptyState, HeaderInfo, MenuEntry, PageView};

impl<C: Console> Router<C> {
    /// Computes the view model for `page`.
    ///
    /// # Errors
    ///
    /// Book pages fail with [`BookshelfError::MissingPayload`] without a
    /// payload, and with [`BookshelfError::BookNotFound`] if the book is gone.
    pub fn page_view(&self, page: PageKind, payload: Option<BookId>) -> Result<PageView> {
        let mut view = PageView {
            header: HeaderInfo { title: format!("[{}]", page.title()) },
            body: Vec::new(),
            empty_state: None,
            menu: self.menu_for(page),
        };

        match page {
            PageKind::Home => {
                view.header.title = "Welcome to the library!".to_string();
                view.body.push(
                    "Move between pages by typing their short codes (English keyboard layout)."
                        .to_string(),
                );
            }
            PageKind::Catalog => {
                if self.catalog.is_empty() {
                    view.empty_state = Some(EmptyState {
                        message: "There are no books in your library yet.".to_string(),
                        subtitle: "Add books on the add book page.".to_string(),
                    });
                } else {
                    view.body.push("Enter the id of the book you want to open:".to_string());
                    view.body.extend(render_book_list(self.catalog.books()));
                }
            }
            PageKind::Search => {
                view.body
                    .push("Enter text to search books by title | author | year:".to_string());
            }
            PageKind::AddBook => {}
            PageKind::BookDetail => {
                let book = self.payload_book(page, payload)?;
                view.header.title = format!("[{}]: {}", page.title(), book.title);
                view.body.extend(render_book_detail(book));
                view.body.extend([
                    String::new(),
                    "---".to_string(),
                    "Choose an action:".to_string(),
                    format!("{} - Change status", PageKind::UpdateStatus.code()),
                    format!("{} - Remove book", PageKind::RemoveConfirm.code()),
                ]);
            }
            PageKind::UpdateStatus => {
                let book = self.payload_book(page, payload)?;
                view.header.title = format!("[{}]: {}", page.title(), book.title);
                view.body.extend([
                    format!("Current status: {}", book.status),
                    String::new(),
                    "Choose a new status:".to_string(),
                    format!("1. {}", BookStatus::Available),
                    format!("2. {}", BookStatus::CheckedOut),
                ]);
            }
            PageKind::RemoveConfirm => {
                let book = self.payload_book(page, payload)?;
                view.header.title = format!("[{}]: {}", page.title(), book.title);
                view.body.extend([
                    "Are you sure you want to remove this book?".to_string(),
                    "1. Yes".to_string(),
                    "2. No".to_string(),
                ]);
            }
            PageKind::Exit => {
                view.header.title = "Goodbye! Come back soon!".to_string();
            }
        }

        Ok(view)
    }

    /// Menu entries for a page's links that are present in the registry.
    #[must_use]
    pub fn menu_for(&self, page: PageKind) -> Vec<MenuEntry> {
        page.links()
            .iter()
            .filter_map(|link| self.lookup(link.code()))
            .map(|target| MenuEntry {
                code: target.code(),
                title: target.title(),
            })
            .collect()
    }

    /// Resolves the book a book page was opened for.
    pub(crate) fn payload_book(&self, page: PageKind, payload: Option<BookId>) -> Result<&Book> {
        let id = payload.ok_or(BookshelfError::MissingPayload(page.code()))?;
        self.catalog.get(id).ok_or(BookshelfError::BookNotFound(id))
    }
}
