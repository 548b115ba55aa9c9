//! File-based logging for the catalog.
//!
//! This module wires the `tracing` macros used across the crate to a
//! `tracing-subscriber` `fmt` layer that writes plain-text lines to a rotating
//! log file. Nothing is ever logged to stdout, which carries the menus.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option (`BOOKSHELF_TRACE_LEVEL`)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
