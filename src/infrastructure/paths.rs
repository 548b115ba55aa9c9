//! Path helpers for configuration, data, and log locations.
//!
//! Everything is resolved relative to the working directory unless the user
//! points elsewhere. Paths may start with `~`, which expands to `$HOME`.

use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "bookshelf.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "BOOKSHELF_CONFIG";

/// Default collection file.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Default log file name, placed next to the data file.
pub const DEFAULT_LOG_FILE: &str = "bookshelf.log";

/// Expands a leading `~` against `home`.
///
/// Only `~` on its own and `~/...` are expanded; `~user` forms are left alone,
/// as is everything when `home` is unknown.
///
/// # Examples
///
/// ```
/// use bookshelf::infrastructure::paths::expand_tilde_with;
/// use std::path::{Path, PathBuf};
///
/// let home = Some(Path::new("/home/reader"));
/// assert_eq!(expand_tilde_with("~/books.json", home), PathBuf::from("/home/reader/books.json"));
/// assert_eq!(expand_tilde_with("~", home), PathBuf::from("/home/reader"));
/// assert_eq!(expand_tilde_with("/srv/data.json", home), PathBuf::from("/srv/data.json"));
/// ```
#[must_use]
pub fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (_, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        _ => PathBuf::from(path),
    }
}

/// Expands a leading `~` against the `HOME` environment variable.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_tilde_with(path, home.as_deref())
}

/// Where to look for the config file: `BOOKSHELF_CONFIG` if set, otherwise
/// `bookshelf.toml` in the working directory.
#[must_use]
pub fn config_file_path() -> PathBuf {
    std::env::var(CONFIG_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |value| expand_tilde(value.trim()))
}

/// Default log location: [`DEFAULT_LOG_FILE`] in the data file's directory.
#[must_use]
pub fn default_log_file(data_file: &Path) -> PathBuf {
    match data_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(DEFAULT_LOG_FILE),
        _ => PathBuf::from(DEFAULT_LOG_FILE),
    }
}
