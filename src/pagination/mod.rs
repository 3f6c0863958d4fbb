//! Pagination module
//!
//! Relay-style cursor connections over ordered record sequences.
//!
//! # Overview
//!
//! A request is either forward (`first` records after a cursor) or backward
//! (`last` records before a cursor). The [`Paginator`] validates the request,
//! resolves the cursor to a position, slices the sequence and wraps each
//! record in an [`Edge`]. Stale or malformed cursors never fail a request;
//! they fall back to the start (forward) or end (backward) of the sequence.

mod cursor;
mod lookup;
mod paginator;
mod types;

pub use cursor::{decode_cursor, encode_cursor, CursorCodec, DEFAULT_CURSOR_PREFIX};
pub use lookup::{BinarySearch, LinearScan, LookupStrategy, PositionLookup};
pub use paginator::{paginate, Paginator};
pub use types::{Edge, Page, PageInfo, PaginationArgs, PaginationRequest};
