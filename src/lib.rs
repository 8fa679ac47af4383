//! # chart-images
//!
//! A Rust-based command-line tool that lists the container images a Helm
//! chart or deployed release would pull. The chart (or release) is rendered
//! to a multi-document YAML blob, split into individual manifests, and every
//! workload kind is walked for its container image references across init,
//! regular and ephemeral containers.
//!
//! ## Example
//!
//! ```rust
//! use chart_images::manifest::records_from_manifests;
//!
//! # fn main() -> chart_images::Result<()> {
//! let rendered = "\
//! apiVersion: apps/v1
//! kind: Deployment
//! metadata:
//!   name: web
//! spec:
//!   template:
//!     spec:
//!       containers:
//!       - name: web
//!         image: nginx:1.27
//! ";
//! let records = records_from_manifests(rendered, false)?;
//! assert_eq!(records[0].images, vec!["nginx:1.27".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod helm;
pub mod manifest;
pub mod output;

// Re-export commonly used types and functions
pub use error::{ImagesError, Result};
pub use manifest::{ImageRecord, Workload, split_documents};

use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Get {
            chart,
            from_release,
            manifest,
            release_name,
            values,
            set,
            namespace,
            registry,
            unique,
            skip_broken,
            format,
            output,
        } => handlers::handle_get(
            chart,
            from_release,
            manifest,
            release_name,
            values,
            set,
            namespace,
            registry,
            unique,
            skip_broken,
            format,
            output,
        ),
    }
}
