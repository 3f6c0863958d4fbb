//! Relay cursor pagination over an ordered slice
//!
//! Implements the connection pagination algorithm: validate the arguments,
//! resolve the cursor to an index, cut a window around it, and report whether
//! records exist past either end of that window.

use super::cursor::CursorCodec;
use super::lookup::{LookupStrategy, PositionLookup};
use super::types::{Edge, Page, PageInfo, PaginationArgs, PaginationRequest};
use crate::config::PaginatorConfig;
use crate::error::Result;
use crate::types::{is_sorted_by_id, Node};
use tracing::{debug, warn};

/// Computes connection pages over caller-supplied record sequences
///
/// Holds no record data. The same paginator can serve any number of
/// sequences, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Paginator<L = LookupStrategy> {
    codec: CursorCodec,
    lookup: L,
}

impl Paginator {
    /// Paginator with the `user` cursor prefix and linear lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a paginator from configuration
    pub fn from_config(config: &PaginatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            codec: CursorCodec::new(config.cursor_prefix.as_str())?,
            lookup: config.lookup,
        })
    }
}

impl<L: PositionLookup> Paginator<L> {
    /// Replace the cursor codec
    pub fn with_codec(mut self, codec: CursorCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Replace the position lookup
    pub fn with_lookup<M: PositionLookup>(self, lookup: M) -> Paginator<M> {
        Paginator {
            codec: self.codec,
            lookup,
        }
    }

    /// Cursor codec used for edges and for resolving request cursors
    pub fn codec(&self) -> &CursorCodec {
        &self.codec
    }

    /// Validate raw arguments and compute the page
    ///
    /// Fails with [`Error::InvalidRequest`](crate::Error::InvalidRequest) when
    /// the arguments do not form exactly one complete, non-negative pair.
    /// Nothing is resolved or sliced before validation passes.
    pub fn paginate<'a, T: Node>(
        &self,
        records: &'a [T],
        args: &PaginationArgs,
    ) -> Result<Page<&'a T>> {
        let request = args.validate()?;
        Ok(self.page(records, &request))
    }

    /// Compute the page for an already validated request
    pub fn page<'a, T: Node>(
        &self,
        records: &'a [T],
        request: &PaginationRequest,
    ) -> Page<&'a T> {
        if cfg!(debug_assertions) && !is_sorted_by_id(records) {
            warn!("Records are not sorted ascending by id; cursor positions may be wrong");
        }

        let window = self.window(records, request);
        debug!(
            start = %window.start,
            end = %window.end,
            len = records.len(),
            "Resolved pagination window"
        );

        let edges: Vec<Edge<&'a T>> = records[window.slice(records.len())]
            .iter()
            .map(|node| Edge {
                cursor: self.codec.encode(node.id()),
                node,
            })
            .collect();

        let page_info = PageInfo {
            has_next_page: window.end < records.len() as i128,
            has_previous_page: window.start > 0,
            start_cursor: edges.first().map(|edge| edge.cursor.clone()),
            end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        };

        Page { edges, page_info }
    }

    /// Unclamped `[start, end)` window for a request
    fn window<T: Node>(&self, records: &[T], request: &PaginationRequest) -> Window {
        let len = records.len() as i128;

        match request {
            PaginationRequest::Forward { first, after } => {
                let after_index = self
                    .resolve(records, after)
                    .map_or(-1, |index| index as i128);
                let start = after_index + 1;
                Window {
                    start,
                    end: start + i128::from(*first),
                }
            }
            PaginationRequest::Backward { last, before } => {
                let end = self
                    .resolve(records, before)
                    .map_or(len, |index| index as i128);
                Window {
                    start: end - i128::from(*last),
                    end,
                }
            }
        }
    }

    /// Index of the record a cursor points at
    ///
    /// Malformed cursors and cursors for records no longer in the sequence
    /// both resolve to `None`; the caller substitutes a sequence boundary.
    fn resolve<T: Node>(&self, records: &[T], cursor: &str) -> Option<usize> {
        let Some(id) = self.codec.decode(cursor) else {
            warn!(cursor, "Invalid cursor, falling back to sequence boundary");
            return None;
        };

        let position = self.lookup.position(records, id);
        if position.is_none() {
            debug!(id, "Cursor references a record not in the sequence");
        }
        position
    }
}

/// Half-open index range before clamping to the sequence
///
/// `i128` holds `-1 + u64::MAX` and `usize::MAX - u64::MAX` without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: i128,
    end: i128,
}

impl Window {
    /// Clamp to `[0, len)`, empty when the bounds cross
    fn slice(self, len: usize) -> std::ops::Range<usize> {
        let len_i = len as i128;
        let start = self.start.clamp(0, len_i) as usize;
        let end = self.end.clamp(0, len_i) as usize;
        start..end.max(start)
    }
}

/// Paginate `records` with the default paginator
///
/// Shorthand for `Paginator::new().paginate(records, args)`.
pub fn paginate<'a, T: Node>(records: &'a [T], args: &PaginationArgs) -> Result<Page<&'a T>> {
    Paginator::new().paginate(records, args)
}
