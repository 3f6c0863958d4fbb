//! Pagination types
//!
//! Raw connection arguments, the validated request they turn into, and the
//! page handed back to the caller.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Arguments
// ============================================================================

/// Connection arguments exactly as a client sent them
///
/// Counts are signed so that negative values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl PaginationArgs {
    /// Forward arguments: `first` records after `after`
    pub fn forward(first: i64, after: impl Into<String>) -> Self {
        Self {
            first: Some(first),
            after: Some(after.into()),
            ..Default::default()
        }
    }

    /// Backward arguments: `last` records before `before`
    pub fn backward(last: i64, before: impl Into<String>) -> Self {
        Self {
            last: Some(last),
            before: Some(before.into()),
            ..Default::default()
        }
    }

    /// Validate into a [`PaginationRequest`]
    pub fn validate(&self) -> Result<PaginationRequest> {
        PaginationRequest::try_from(self.clone())
    }
}

// ============================================================================
// Request
// ============================================================================

/// A validated pagination request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationRequest {
    /// Up to `first` records following the `after` cursor
    Forward { first: u64, after: String },
    /// Up to `last` records preceding the `before` cursor
    Backward { last: u64, before: String },
}

impl PaginationRequest {
    /// Create a forward request
    pub fn forward(first: u64, after: impl Into<String>) -> Self {
        Self::Forward {
            first,
            after: after.into(),
        }
    }

    /// Create a backward request
    pub fn backward(last: u64, before: impl Into<String>) -> Self {
        Self::Backward {
            last,
            before: before.into(),
        }
    }

    /// Check if this is a forward request
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward { .. })
    }

    /// Check if this is a backward request
    pub fn is_backward(&self) -> bool {
        matches!(self, Self::Backward { .. })
    }
}

impl TryFrom<PaginationArgs> for PaginationRequest {
    type Error = Error;

    fn try_from(args: PaginationArgs) -> Result<Self> {
        let PaginationArgs {
            first,
            after,
            last,
            before,
        } = args;

        // Each pair is all-or-nothing
        if first.is_some() != after.is_some() {
            return Err(Error::invalid_request(
                "Cannot specify first without after and vice-versa.",
            ));
        }
        if last.is_some() != before.is_some() {
            return Err(Error::invalid_request(
                "Cannot specify last without before and vice-versa.",
            ));
        }

        match (first.zip(after), last.zip(before)) {
            (Some((first, after)), None) => {
                let first = u64::try_from(first)
                    .map_err(|_| Error::invalid_request("first cannot be negative"))?;
                Ok(Self::Forward { first, after })
            }
            (None, Some((last, before))) => {
                let last = u64::try_from(last)
                    .map_err(|_| Error::invalid_request("last cannot be negative"))?;
                Ok(Self::Backward { last, before })
            }
            (Some(_), Some(_)) => Err(Error::invalid_request(
                "Cannot combine forward (first, after) and backward (last, before) arguments.",
            )),
            (None, None) => Err(Error::invalid_request(
                "Either first and after must be specified or before and last.",
            )),
        }
    }
}

// ============================================================================
// Page
// ============================================================================

/// A record paired with its cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

/// Whether more records exist on either side of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// Cursor of the first edge, `None` when the page is empty
    pub start_cursor: Option<String>,
    /// Cursor of the last edge, `None` when the page is empty
    pub end_cursor: Option<String>,
}

/// One page of a connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Number of edges in this page
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if this page has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over the nodes in order
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Transform every node, keeping cursors and page info
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    node: f(edge.node),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: self.page_info,
        }
    }
}

impl<T: Clone> Page<&T> {
    /// Clone the borrowed nodes into an owned page
    pub fn cloned(self) -> Page<T> {
        self.map(Clone::clone)
    }
}
