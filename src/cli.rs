use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chart-images")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List container images referenced by a Helm chart or release")]
#[command(
    long_about = "Renders a Helm chart (or reads a deployed release's manifest) and lists every container image the resulting workloads reference, across init, regular and ephemeral containers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all images that are part of the specified chart or release
    Get {
        /// Chart path, or release name with --from-release
        #[arg(value_name = "CHART|RELEASE", required_unless_present = "manifest")]
        chart: Option<String>,

        /// Treat the argument as a deployed release and read its manifest
        #[arg(long)]
        from_release: bool,

        /// Read a pre-rendered manifest from a file instead of invoking helm
        /// ("-" reads standard input)
        #[arg(
            long,
            value_name = "FILE",
            conflicts_with_all = ["from_release", "values", "set", "release_name"]
        )]
        manifest: Option<PathBuf>,

        /// Release name to render the chart under
        #[arg(long, default_value = "release-name")]
        release_name: String,

        /// Values file forwarded to helm (repeatable)
        #[arg(short = 'f', long = "values", value_name = "FILE")]
        values: Vec<PathBuf>,

        /// Chart value forwarded to helm as --set (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Kubernetes namespace
        #[arg(short = 'n', long)]
        namespace: Option<String>,

        /// Keep only images containing this registry substring (repeatable)
        #[arg(long = "registry", value_name = "REGISTRY")]
        registry: Vec<String>,

        /// Deduplicate images (first seen wins) and print a flat list
        #[arg(long)]
        unique: bool,

        /// Skip documents that fail to decode instead of aborting
        #[arg(long)]
        skip_broken: bool,

        /// Output format
        #[arg(long, value_enum, env = "CHART_IMAGES_FORMAT")]
        format: Option<OutputFormat>,

        /// Write the result to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
