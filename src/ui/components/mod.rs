//! Composable line-based UI components.
//!
//! Each component turns a piece of a view model into plain text lines; the
//! console decides where they go.
//!
//! # Components
//!
//! - [`header`]: Framed page title
//! - [`menu`]: Link list of page codes and titles
//! - [`book`]: Book list and detail lines
//! - [`empty`]: Empty state message

mod book;
mod empty;
mod header;
mod menu;

pub use book::{render_book_detail, render_book_list};
pub use empty::render_empty_state;
pub use header::{render_header, RULE};
pub use menu::render_menu;
