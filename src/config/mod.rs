//! Configuration loading.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const CONFIG_FILE_NAME: &str = ".chart-images.toml";

/// Get the global config file path (~/.chart-images.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (dir/.chart-images.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
/// Checks the local config first, then the global config; a malformed file is
/// skipped with a warning rather than aborting the run.
pub fn load_config(dir: Option<&Path>) -> Result<types::Config> {
    let mut candidates = Vec::new();
    if let Some(dir) = dir {
        candidates.push(local_config_path(dir));
    }
    if let Some(global) = global_config_path() {
        candidates.push(global);
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        match toml::from_str(&content) {
            Ok(config) => return Ok(config),
            Err(err) => log::warn!("ignoring malformed config {}: {}", path.display(), err),
        }
    }

    Ok(types::Config::default())
}
