//! Paginator configuration
//!
//! Loaded from YAML:
//!
//! ```yaml
//! cursor_prefix: user
//! lookup: binary
//! log_level: debug
//! ```
//!
//! Every field is optional; an empty document yields the defaults.

use crate::error::{Error, Result};
use crate::pagination::{LookupStrategy, DEFAULT_CURSOR_PREFIX};
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a [`Paginator`](crate::pagination::Paginator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginatorConfig {
    /// Tag prefix inside cursors (`<prefix>_<id>`)
    #[serde(default = "default_cursor_prefix")]
    pub cursor_prefix: String,

    /// How cursors are resolved to positions
    #[serde(default)]
    pub lookup: LookupStrategy,

    /// Log level for the CLI
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_cursor_prefix() -> String {
    DEFAULT_CURSOR_PREFIX.to_string()
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            cursor_prefix: default_cursor_prefix(),
            lookup: LookupStrategy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl PaginatorConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        Self::from_yaml_str(&content)
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if self.cursor_prefix.is_empty() {
            return Err(Error::invalid_config_value(
                "cursor_prefix",
                "prefix cannot be empty",
            ));
        }

        if !self
            .cursor_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::invalid_config_value(
                "cursor_prefix",
                format!(
                    "'{}' may only contain ASCII letters, digits and '_'",
                    self.cursor_prefix
                ),
            ));
        }

        Ok(())
    }
}
