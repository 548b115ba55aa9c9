//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently this is path handling: where the config, collection, and log
//! files live, and `~` expansion for user-supplied paths.

pub mod paths;

pub use paths::{config_file_path, default_log_file, expand_tilde};
