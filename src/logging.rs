use std::{
    error::Error,
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

use crate::app_dirs::AppDirs;

/// Environment variable holding the tracing filter, e.g. `debug` or `wordsprint=trace`
pub const LOG_ENV: &str = "WORDSPRINT_LOG";

/// Pick the log destination: an explicit path wins, otherwise the default
/// state-dir file when a filter is set in the environment. `None` disables logging.
pub fn resolve_log_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| std::env::var_os(LOG_ENV).map(|_| AppDirs::log_path()))
}

/// Install a file-backed tracing subscriber. The terminal belongs to the
/// TUI, so nothing is ever written to stdout or stderr.
pub fn init(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)
}
