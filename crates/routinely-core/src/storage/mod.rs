mod config;
mod task_store;

pub use config::{Config, ExportConfig, DEFAULT_START_TIME};
pub use task_store::TaskStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/routinely/`, creating it if needed.
///
/// Set ROUTINELY_DATA_DIR to point at a different directory (tests and
/// development use this to keep real user data untouched).
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = match std::env::var_os("ROUTINELY_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("routinely"),
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
