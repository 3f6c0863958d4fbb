//! CLI module
//!
//! Command-line interface over the paginator.
//!
//! # Commands
//!
//! - `encode` - Print the cursor for a record id
//! - `decode` - Print the record id inside a cursor
//! - `page` - Paginate a JSON file of users
//! - `seed` - Generate a JSON file of users

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
