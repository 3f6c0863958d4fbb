//! relay-connections CLI
//!
//! Command-line interface for encoding cursors and paginating record files

use clap::Parser;
use relay_connections::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    let runner = match Runner::new(cli) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let level = tracing::Level::from(runner.log_level());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
