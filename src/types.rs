//! Common types used throughout relay-connections
//!
//! Records are opaque to the paginator apart from their id, exposed through
//! the [`Node`] trait.

use serde::{Deserialize, Serialize};

// ============================================================================
// Node
// ============================================================================

/// A record that can appear in a connection
///
/// Ids must be unique within a sequence, and sequences are expected to be
/// sorted ascending by id.
pub trait Node {
    /// Stable identifier of this record
    fn id(&self) -> u64;
}

impl<T: Node + ?Sized> Node for &T {
    fn id(&self) -> u64 {
        (**self).id()
    }
}

/// Check that ids are strictly ascending
pub fn is_sorted_by_id<T: Node>(records: &[T]) -> bool {
    records.windows(2).all(|pair| pair[0].id() < pair[1].id())
}

// ============================================================================
// User
// ============================================================================

/// User record served by the connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl User {
    /// Create a user with placeholder fields derived from the id
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            name: format!("name_{id}"),
            email: format!("{id}@email.com"),
            avatar: format!("avatar_{id}"),
        }
    }
}

impl Node for User {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Generate `count` users with ids `1..=count`
pub fn seed_users(count: u64) -> Vec<User> {
    (1..=count).map(User::with_id).collect()
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
