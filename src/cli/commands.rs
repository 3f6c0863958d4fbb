//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relay cursor connections CLI
#[derive(Parser, Debug)]
#[command(name = "relay-connections")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paginator configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cursor for a record id
    Encode {
        /// Record id
        id: u64,
    },

    /// Print the record id a cursor points at
    Decode {
        /// Opaque cursor
        cursor: String,
    },

    /// Paginate a JSON array of users sorted by id
    Page {
        /// Records file (JSON array of users)
        #[arg(short, long)]
        records: PathBuf,

        /// Number of records after the `after` cursor
        #[arg(long, allow_negative_numbers = true)]
        first: Option<i64>,

        /// Cursor to start after
        #[arg(long)]
        after: Option<String>,

        /// Number of records before the `before` cursor
        #[arg(long, allow_negative_numbers = true)]
        last: Option<i64>,

        /// Cursor to end before
        #[arg(long)]
        before: Option<String>,
    },

    /// Generate users with ids 1..=count
    Seed {
        /// Number of users
        #[arg(long, default_value = "10")]
        count: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
