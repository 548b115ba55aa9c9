//! Storage layer for the persistent book collection.
//!
//! This module provides the storage abstraction for the catalog and the
//! in-memory record store built on top of it.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `catalog`: In-memory record store with id assignment and persistence rules

pub mod backend;
pub mod catalog;
pub mod json;

pub use backend::Storage;
pub use catalog::{Catalog, Confirmation};
pub use json::JsonStorage;
