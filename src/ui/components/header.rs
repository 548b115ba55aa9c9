//! Header component renderer.

use crate::ui::viewmodel::HeaderInfo;

/// Horizontal rule framing page headers.
pub const RULE: &str = "---------------------------------------";

/// Renders the title between two rules, with a blank line above and below.
///
/// # Example
///
/// ```text
///
/// ---------------------------------------
/// [Catalog]
/// ---------------------------------------
///
/// ```
#[must_use]
pub fn render_header(header: &HeaderInfo) -> Vec<String> {
    vec![
        String::new(),
        RULE.to_string(),
        header.title.clone(),
        RULE.to_string(),
        String::new(),
    ]
}
