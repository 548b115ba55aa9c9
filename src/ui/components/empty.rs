//! Empty state component renderer.

use crate::ui::viewmodel::EmptyState;

/// Renders the message and its hint on consecutive lines.
#[must_use]
pub fn render_empty_state(empty: &EmptyState) -> Vec<String> {
    vec![empty.message.clone(), empty.subtitle.clone()]
}
