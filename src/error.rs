//! Error types for chart-images.
//!
//! Provides structured error types for rendering, decoding and output.

use thiserror::Error;

/// Errors that can occur while rendering manifests and extracting images.
#[derive(Debug, Error)]
pub enum ImagesError {
    /// The helm binary is not installed or not on PATH.
    #[error("helm binary not found in PATH")]
    HelmNotFound,

    /// A helm subcommand exited with a failure status.
    #[error("`helm {command}` failed: {message}")]
    HelmCommand {
        /// The helm subcommand that was invoked.
        command: String,
        /// Stderr reported by helm.
        message: String,
    },

    /// A rendered document could not be decoded as a Kubernetes object.
    #[error("failed to decode document {index}: {source}")]
    Decode {
        /// Zero-based position of the document within the rendered blob.
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    /// I/O error reading a manifest file or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize results as JSON.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to serialize results as YAML.
    #[error("failed to serialize output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid usage not expressible as a clap constraint.
    #[error("{0}")]
    Usage(String),
}

/// Result type alias for chart-images operations.
pub type Result<T> = std::result::Result<T, ImagesError>;
