//! View model types representing one screen of the text interface.
//!
//! A [`PageView`] is computed by the router for a page (and its payload) and
//! consumed by the renderer. It contains no business logic, only display-ready
//! text.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::ui::{HeaderInfo, MenuEntry, PageView};
//!
//! let view = PageView {
//!     header: HeaderInfo { title: "[Catalog]".to_string() },
//!     body: vec!["1. Dune, Frank Herbert, 1965, Available".to_string()],
//!     empty_state: None,
//!     menu: vec![MenuEntry { code: "h", title: "Home" }],
//! };
//! assert_eq!(view.menu.len(), 1);
//! ```

/// Complete view model for one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Framed title at the top of the page.
    pub header: HeaderInfo,

    /// Page-specific body lines, printed as-is.
    pub body: Vec<String>,

    /// Shown instead of the body when a list page has nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Links to other pages. Empty when the page declares none.
    pub menu: Vec<MenuEntry>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display between the header rules.
    pub title: String,
}

/// One navigable link: the code to type and the title of the page it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub code: &'static str,
    pub title: &'static str,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Your library has no books yet.").
    pub message: String,

    /// Secondary hint (e.g., "Add books on the add book page.").
    pub subtitle: String,
}
