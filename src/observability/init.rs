//! Tracing initialization and subscriber setup.
//!
//! Stdout belongs to the menus, so log output goes to a rotating file next to
//! the data file instead.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default level when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with a file-backed `fmt` layer.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently skips logging if directory creation fails (logging is optional)
/// - Idempotent: safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```no_run
/// use bookshelf::observability::init_tracing;
/// use bookshelf::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    if let Some(dir) = config.log_file.parent() {
        if !dir.as_os_str().is_empty() && std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(FileWriter::new(config.log_file.clone()));

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
