//! Bookshelf: a text-menu library catalog manager.
//!
//! Bookshelf keeps a small personal library in a single JSON file and lets one
//! local user work with it through typed page codes:
//! - List the catalog and open a book by its id
//! - Search by title, author, or year
//! - Add books through a validated three-field form
//! - Change a book's lending status or remove it
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary entry point (main.rs)                       │  ← Config, logging
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Page state machine
//! │  - Router and page registry                         │
//! │  - Input handling and transitions                   │
//! │  - Add-book form session                            │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ Storage Layer         │
//! │ - View models         │          │ (storage/)            │
//! │ - Line rendering      │          │ - Catalog (records)   │
//! │ - Components          │          │ - JSON file backend   │
//! └───────────────────────┘          └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths and `~` expansion (infrastructure/)        │
//! │  - Book model, validation, errors (domain/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Router, pages, transitions, console abstraction
//! - [`domain`]: Core domain types (Book, validation, errors)
//! - [`infrastructure`]: Path resolution
//! - [`storage`]: Record store and JSON persistence
//! - [`ui`]: Plain-text rendering of pages
//! - [`observability`]: File-based tracing
//!
//! # Configuration
//!
//! Settings come from defaults, then an optional `bookshelf.toml` (or the file
//! named by `BOOKSHELF_CONFIG`), then environment variables:
//!
//! ```toml
//! # bookshelf.toml
//! data_file = "~/library/data.json"
//! log_file = "~/library/bookshelf.log"
//! trace_level = "debug"
//! pause_ms = 500
//! ```
//!
//! | Key           | Environment variable     | Default          |
//! |---------------|--------------------------|------------------|
//! | `data_file`   | `BOOKSHELF_DATA_FILE`    | `data.json`      |
//! | `log_file`    | `BOOKSHELF_LOG_FILE`     | `bookshelf.log`  |
//! | `trace_level` | `BOOKSHELF_TRACE_LEVEL`  | `info`           |
//! | `pause_ms`    | `BOOKSHELF_PAUSE_MS`     | `1000`           |
//!
//! # Examples
//!
//! ```no_run
//! use bookshelf::{initialize, Config};
//!
//! let config = Config::load()?;
//! let mut router = initialize(&config)?;
//! router.start()?;
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{Console, PageKind, Router, RouterMode, RouterOptions, StdConsole, Transition};
pub use domain::{Book, BookStatus, BookshelfError, Result};
pub use storage::{Catalog, JsonStorage};

use infrastructure::paths;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Default operator pause in milliseconds.
const DEFAULT_PAUSE_MS: u64 = 1000;

/// Environment variables and the config keys they override.
const ENV_KEYS: [(&str, &str); 4] = [
    ("BOOKSHELF_DATA_FILE", "data_file"),
    ("BOOKSHELF_LOG_FILE", "log_file"),
    ("BOOKSHELF_TRACE_LEVEL", "trace_level"),
    ("BOOKSHELF_PAUSE_MS", "pause_ms"),
];

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Collection file. Created with an empty list if missing.
    pub data_file: PathBuf,

    /// Log file for tracing output. Defaults to `bookshelf.log` next to the
    /// data file.
    pub log_file: PathBuf,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`.
    /// `RUST_LOG` wins over this. Default: `"info"`
    pub trace_level: Option<String>,

    /// Pause after "Book added" style messages, in milliseconds.
    pub pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let data_file = PathBuf::from(paths::DEFAULT_DATA_FILE);
        Self {
            log_file: paths::default_log_file(&data_file),
            data_file,
            trace_level: None,
            pause_ms: DEFAULT_PAUSE_MS,
        }
    }
}

/// Shape of `bookshelf.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    data_file: Option<String>,
    log_file: Option<String>,
    trace_level: Option<String>,
    pause_ms: Option<u64>,
}

impl FileConfig {
    fn into_entries(self) -> BTreeMap<String, String> {
        let mut entries = BTreeMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                entries.insert(key.to_string(), value);
            }
        };
        put("data_file", self.data_file);
        put("log_file", self.log_file);
        put("trace_level", self.trace_level);
        put("pause_ms", self.pause_ms.map(|ms| ms.to_string()));
        entries
    }
}

impl Config {
    /// Builds a configuration from key/value pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `data_file`, `log_file`: paths, `~` expanded; empty values ignored
    /// - `log_file` missing: `bookshelf.log` next to `data_file`
    /// - `trace_level`: kept as given; empty values ignored
    /// - `pause_ms`: `u64`, falls back to 1000 on parse error
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    /// use bookshelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_file".to_string(), "/srv/library/books.json".to_string());
    /// map.insert("pause_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.log_file, PathBuf::from("/srv/library/bookshelf.log"));
    /// assert_eq!(config.pause_ms, 1000);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let data_file = value("data_file")
            .map_or_else(|| PathBuf::from(paths::DEFAULT_DATA_FILE), paths::expand_tilde);
        let log_file = value("log_file")
            .map_or_else(|| paths::default_log_file(&data_file), paths::expand_tilde);
        let pause_ms = value("pause_ms")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_PAUSE_MS);

        Self {
            data_file,
            log_file,
            trace_level: value("trace_level").map(String::from),
            pause_ms,
        }
    }

    /// Merges config file contents and environment overrides, then parses.
    ///
    /// `file` is the text of a TOML config file, if one was found. `env` holds
    /// environment variables; only the `BOOKSHELF_*` keys are read.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Config`] if `file` is not valid TOML or has
    /// unknown keys.
    pub fn resolve(file: Option<&str>, env: &BTreeMap<String, String>) -> Result<Self> {
        let mut entries = match file {
            Some(text) => toml::from_str::<FileConfig>(text)
                .map_err(|e| BookshelfError::Config(format!("invalid config file: {e}")))?
                .into_entries(),
            None => BTreeMap::new(),
        };

        for (var, key) in ENV_KEYS {
            if let Some(value) = env.get(var) {
                entries.insert(key.to_string(), value.clone());
            }
        }

        Ok(Self::from_map(&entries))
    }

    /// Loads configuration from the config file (if present) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Config`] if the config file exists but cannot
    /// be read or parsed.
    pub fn load() -> Result<Self> {
        let path = paths::config_file_path();
        let file = match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(BookshelfError::Config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };

        let env: BTreeMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("BOOKSHELF_"))
            .collect();

        Self::resolve(file.as_deref(), &env)
    }

    /// Router options for an interactive session with the configured pause.
    #[must_use]
    pub const fn router_options(&self) -> RouterOptions {
        RouterOptions {
            mode: RouterMode::Interactive,
            pause: Duration::from_millis(self.pause_ms),
        }
    }
}

/// Opens the catalog and builds a router on the given console.
///
/// # Errors
///
/// Returns an error if the collection file cannot be created, read, or parsed.
pub fn initialize_with<C: Console>(
    config: &Config,
    console: C,
    options: RouterOptions,
) -> Result<Router<C>> {
    tracing::debug!(data_file = %config.data_file.display(), "initializing bookshelf");

    let storage = JsonStorage::new(config.data_file.clone());
    let catalog = Catalog::open(Box::new(storage))?;

    tracing::info!(books = catalog.len(), "catalog loaded");
    Ok(Router::new(catalog, console, options))
}

/// Opens the catalog and builds a terminal router.
///
/// # Errors
///
/// Returns an error if the collection file cannot be created, read, or parsed.
/// This is fatal at startup.
pub fn initialize(config: &Config) -> Result<Router<StdConsole>> {
    initialize_with(config, StdConsole::new(), config.router_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_use_working_directory() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.log_file, PathBuf::from("bookshelf.log"));
        assert_eq!(config.trace_level, None);
        assert_eq!(config.pause_ms, 1000);
        assert_eq!(Config::from_map(&BTreeMap::new()), config);
    }

    #[test]
    fn environment_overrides_file() {
        let file = r#"
            data_file = "/srv/file.json"
            trace_level = "warn"
            pause_ms = 250
        "#;
        let config = Config::resolve(
            Some(file),
            &env(&[("BOOKSHELF_TRACE_LEVEL", "debug"), ("HOME", "/ignored")]),
        )
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("/srv/file.json"));
        assert_eq!(config.log_file, PathBuf::from("/srv/bookshelf.log"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.pause_ms, 250);
    }

    #[test]
    fn invalid_file_is_a_config_error() {
        let err = Config::resolve(Some("pause_ms = \"fast\""), &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, BookshelfError::Config(_)));

        let err = Config::resolve(Some("colour = \"red\""), &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, BookshelfError::Config(_)));
    }

    #[test]
    fn bad_pause_in_environment_keeps_default() {
        let config = Config::resolve(None, &env(&[("BOOKSHELF_PAUSE_MS", "-5")])).unwrap();
        assert_eq!(config.pause_ms, 1000);
        assert_eq!(config.router_options().pause, Duration::from_millis(1000));
        assert_eq!(config.router_options().mode, RouterMode::Interactive);
    }
}
