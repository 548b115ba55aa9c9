//! Line-based user interface rendering.
//!
//! This module turns page view models into plain text lines for the console.
//! There is no cursor control and no styling; every page is appended to the
//! scrollback like a transcript.
//!
//! # Architecture
//!
//! ```text
//! Router::page_view → PageView → renderer → Vec<String> → Console
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing one page
//! - [`renderer`]: Content/menu rendering coordinator
//! - [`components`]: Header, menu, book and empty-state components

pub mod components;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_content, render_menu};
pub use viewmodel::{EmptyState, HeaderInfo, MenuEntry, PageView};
