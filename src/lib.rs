//! # relay-connections
//!
//! Relay-style cursor connections over ordered, in-memory record sequences.
//!
//! ## Features
//!
//! - **Forward and backward windows**: `first`/`after` and `last`/`before`
//! - **Opaque cursors**: `base64("user_<id>")`, stable across processes
//! - **Forgiving cursors**: stale or tampered cursors fall back to a sequence boundary
//! - **Accurate page info**: `hasNextPage`/`hasPreviousPage` even for empty pages
//! - **Pluggable lookup**: linear scan, binary search, or your own index
//!
//! ## Quick Start
//!
//! ```rust
//! use relay_connections::pagination::{encode_cursor, paginate, PaginationArgs};
//! use relay_connections::types::seed_users;
//!
//! let users = seed_users(10);
//! let page = paginate(&users, &PaginationArgs::forward(2, encode_cursor(1))).unwrap();
//!
//! let ids: Vec<u64> = page.nodes().map(|user| user.id).collect();
//! assert_eq!(ids, vec![2, 3]);
//! assert!(page.page_info.has_next_page);
//! assert!(page.page_info.has_previous_page);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PaginationArgs ──validate──▶ PaginationRequest
//!                                     │
//!             records ──resolve cursor (PositionLookup)──▶ window [start, end)
//!                                     │
//!                           slice + encode cursors
//!                                     │
//!                                     ▼
//!                         Page { edges, page_info }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Record types and the `Node` trait
pub mod types;

/// Cursor pagination
pub mod pagination;

/// Paginator configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{Node, User};

pub use pagination::{paginate, Page, PageInfo, PaginationArgs, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
