//! Top-level rendering coordinator.
//!
//! Turns a [`PageView`] into the lines written to the console. Content and menu
//! are rendered separately because a page prints its menu again on its own
//! (the search page does this after listing results).

use crate::ui::components;
use crate::ui::viewmodel::PageView;

/// Renders the header and body (or empty state) of a page.
#[must_use]
pub fn render_content(view: &PageView) -> Vec<String> {
    let mut lines = components::render_header(&view.header);

    if let Some(empty) = &view.empty_state {
        lines.extend(components::render_empty_state(empty));
    } else {
        lines.extend(view.body.iter().cloned());
    }

    lines
}

/// Renders the page's link menu, or nothing when it has no links.
#[must_use]
pub fn render_menu(view: &PageView) -> Vec<String> {
    components::render_menu(&view.menu)
}

/// Renders the full page: content followed by menu.
#[must_use]
pub fn render(view: &PageView) -> Vec<String> {
    let mut lines = render_content(view);
    lines.extend(render_menu(view));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{EmptyState, HeaderInfo, MenuEntry};

    fn view(empty: bool, menu: Vec<MenuEntry>) -> PageView {
        PageView {
            header: HeaderInfo { title: "[Catalog]".to_string() },
            body: vec!["1. Dune, Frank Herbert, 1965, Available".to_string()],
            empty_state: empty.then(|| EmptyState {
                message: "Nothing here".to_string(),
                subtitle: "Add something".to_string(),
            }),
            menu,
        }
    }

    #[test]
    fn empty_state_replaces_body() {
        let lines = render_content(&view(true, vec![]));
        assert!(lines.iter().any(|l| l == "Nothing here"));
        assert!(!lines.iter().any(|l| l.contains("Dune")));
    }

    #[test]
    fn menu_is_omitted_without_links() {
        assert!(render_menu(&view(false, vec![])).is_empty());

        let lines = render(&view(false, vec![MenuEntry { code: "h", title: "Home" }]));
        assert_eq!(lines.last().map(String::as_str), Some("h - Home"));
        assert!(lines.iter().any(|l| l.contains("Dune")));
    }
}
