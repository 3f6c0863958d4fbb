//! Position lookup strategies
//!
//! Resolving a cursor means finding the index of the record it names. The
//! paginator delegates that search to a [`PositionLookup`] so callers with an
//! index over their records can skip the linear scan.

use crate::types::Node;
use serde::{Deserialize, Serialize};

/// Finds the index of a record by id
pub trait PositionLookup: Send + Sync {
    /// Index of the record with `id`, or `None` if it is not in `records`
    fn position<T: Node>(&self, records: &[T], id: u64) -> Option<usize>;
}

/// Scan from the front, first match wins
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl PositionLookup for LinearScan {
    fn position<T: Node>(&self, records: &[T], id: u64) -> Option<usize> {
        records.iter().position(|record| record.id() == id)
    }
}

/// Binary search over ids
///
/// Only correct when `records` is sorted ascending by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl PositionLookup for BinarySearch {
    fn position<T: Node>(&self, records: &[T], id: u64) -> Option<usize> {
        records.binary_search_by_key(&id, |record| record.id()).ok()
    }
}

/// Lookup strategy selected at runtime (e.g. from configuration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// [`LinearScan`]
    #[default]
    Linear,
    /// [`BinarySearch`]
    Binary,
}

impl PositionLookup for LookupStrategy {
    fn position<T: Node>(&self, records: &[T], id: u64) -> Option<usize> {
        match self {
            LookupStrategy::Linear => LinearScan.position(records, id),
            LookupStrategy::Binary => BinarySearch.position(records, id),
        }
    }
}
