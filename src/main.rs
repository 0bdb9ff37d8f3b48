//! typeforge CLI
//!
//! Command-line interface for generating type declarations from sample JSON

use clap::Parser;
use typeforge::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose lowers the default level to DEBUG
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
