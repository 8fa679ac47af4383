//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Persistent defaults, read from `.chart-images.toml`.
///
/// Every field is optional in the file; command-line flags always win over
/// configured values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format when `--format` is not given.
    pub format: Option<OutputFormat>,
    /// Registries to filter by when no `--registry` flag is given.
    pub registries: Vec<String>,
    /// Always deduplicate images into a flat list.
    pub unique: bool,
}
