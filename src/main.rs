use clap::Parser;
use std::process;

use chart_images::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = chart_images::run_command(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
