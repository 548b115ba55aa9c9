//! Menu component renderer.

use crate::ui::viewmodel::MenuEntry;

/// Renders `code - title` lines under a short instruction.
///
/// Returns no lines at all for an empty menu.
#[must_use]
pub fn render_menu(entries: &[MenuEntry]) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push(String::new());
    lines.push("------".to_string());
    lines.push("Type the code of the page you want to open:".to_string());
    lines.extend(
        entries
            .iter()
            .map(|entry| format!("{} - {}", entry.code, entry.title)),
    );
    lines
}
