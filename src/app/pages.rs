//! Page kinds and their navigation codes.
//!
//! Every screen of the catalog is one [`PageKind`]. The short code of a page is
//! what users type to open it, so the codes are part of the user-facing
//! contract:
//!
//! | code | page            | needs a book |
//! |------|-----------------|--------------|
//! | `h`  | Home            | no           |
//! | `c`  | Catalog         | no           |
//! | `s`  | Search          | no           |
//! | `n`  | Add book        | no           |
//! | `b`  | Book detail     | yes          |
//! | `r`  | Remove book     | yes          |
//! | `u`  | Update status   | yes          |
//! | `q`  | Exit            | no           |

use std::fmt;

/// One navigable page of the text interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Catalog,
    Search,
    AddBook,
    BookDetail,
    RemoveConfirm,
    UpdateStatus,
    Exit,
}

impl PageKind {
    /// Every page, in registry (and menu iteration) order.
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::Catalog,
        Self::Search,
        Self::AddBook,
        Self::BookDetail,
        Self::RemoveConfirm,
        Self::UpdateStatus,
        Self::Exit,
    ];

    /// Short code typed by the user to open this page.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Home => "h",
            Self::Catalog => "c",
            Self::Search => "s",
            Self::AddBook => "n",
            Self::BookDetail => "b",
            Self::RemoveConfirm => "r",
            Self::UpdateStatus => "u",
            Self::Exit => "q",
        }
    }

    /// Title shown in headers and in other pages' menus.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Catalog => "Catalog",
            Self::Search => "Search books",
            Self::AddBook => "Add a book to the catalog",
            Self::BookDetail => "Book",
            Self::RemoveConfirm => "Remove book",
            Self::UpdateStatus => "Update book status",
            Self::Exit => "Exit",
        }
    }

    /// Codes of sibling pages listed in this page's menu.
    #[must_use]
    pub const fn links(self) -> &'static [Self] {
        match self {
            Self::Home => &[Self::Catalog, Self::Search, Self::AddBook, Self::Exit],
            Self::Catalog => &[Self::Search, Self::AddBook, Self::Home],
            Self::Search => &[Self::Search, Self::Catalog],
            Self::BookDetail => &[Self::Catalog],
            Self::AddBook | Self::RemoveConfirm | Self::UpdateStatus | Self::Exit => &[],
        }
    }

    /// Whether the page can only be shown for a specific book.
    #[must_use]
    pub const fn requires_payload(self) -> bool {
        matches!(self, Self::BookDetail | Self::RemoveConfirm | Self::UpdateStatus)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = PageKind::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes.len(), PageKind::ALL.len());
    }

    #[test]
    fn links_never_point_at_payload_pages() {
        for page in PageKind::ALL {
            assert!(page.links().iter().all(|l| !l.requires_payload()), "{page:?}");
        }
    }

    #[test]
    fn home_links_match_main_menu() {
        let codes: Vec<&str> = PageKind::Home.links().iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["c", "s", "n", "q"]);
    }
}
