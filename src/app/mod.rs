//! Application layer: pages, navigation, and input handling.
//!
//! This module sits between the entry point and the domain/storage layers. It
//! implements the page state machine that drives the text interface.
//!
//! # Architecture
//!
//! ```text
//! Console input → Router::render → handle_input → Catalog mutation
//!                       ↑                │
//!                       └── Transition ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Transitions returned by input handling
//! - [`console`]: Console abstraction (stdin/stdout and scripted)
//! - [`form`]: Add-book form session
//! - [`pages`]: Page kinds, codes, titles and links
//! - [`router`]: Page registry and navigation loop
//! - `content`: Per-page view models
//! - `handler`: Per-page input rules

pub mod actions;
pub mod console;
mod content;
pub mod form;
mod handler;
pub mod pages;
pub mod router;

pub use actions::Transition;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use form::{FormField, FormSession};
pub use handler::INVALID_INPUT;
pub use pages::PageKind;
pub use router::{Router, RouterMode, RouterOptions, INPUT_PROMPT};
