//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PaginatorConfig;
use crate::error::{Error, Result};
use crate::pagination::{PaginationArgs, Paginator};
use crate::types::{seed_users, LogLevel, User};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: PaginatorConfig,
}

impl Runner {
    /// Create a new runner, loading the paginator config if one was given
    pub fn new(cli: Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => PaginatorConfig::from_file(path)?,
            None => PaginatorConfig::default(),
        };
        Ok(Self { cli, config })
    }

    /// Log level to install: `--verbose` wins over the config file
    pub fn log_level(&self) -> LogLevel {
        if self.cli.verbose {
            LogLevel::Debug
        } else {
            self.config.log_level
        }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        self.output_message(&output);
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<Value> {
        let paginator = Paginator::from_config(&self.config)?;

        match &self.cli.command {
            Commands::Encode { id } => Ok(json!({
                "id": id,
                "cursor": paginator.codec().encode(*id),
            })),
            Commands::Decode { cursor } => {
                let id = paginator.codec().decode(cursor).ok_or_else(|| {
                    Error::invalid_request(format!("'{cursor}' is not a valid cursor"))
                })?;
                Ok(json!({ "id": id, "cursor": cursor }))
            }
            Commands::Page {
                records,
                first,
                after,
                last,
                before,
            } => {
                let users = Self::load_records(records)?;
                let args = PaginationArgs {
                    first: *first,
                    after: after.clone(),
                    last: *last,
                    before: before.clone(),
                };
                let page = paginator.paginate(&users, &args)?;
                tracing::info!(
                    edges = page.len(),
                    total = users.len(),
                    "Computed page"
                );
                Ok(serde_json::to_value(&page)?)
            }
            Commands::Seed { count } => Ok(serde_json::to_value(seed_users(*count))?),
        }
    }

    /// Load a JSON array of users
    fn load_records(path: &Path) -> Result<Vec<User>> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let users: Vec<User> = serde_json::from_str(&content)?;
        tracing::debug!(count = users.len(), path = %path.display(), "Loaded records");
        Ok(users)
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
