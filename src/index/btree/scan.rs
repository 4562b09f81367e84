//! Range scan cursor state.

use crate::common::PageId;
use crate::index::btree::node::LeafNode;

/// Comparison operator for a scan bound.
///
/// A scan's low bound accepts only `GT`/`GTE` and its high bound only
/// `LT`/`LTE`; [`BTreeIndex::start_scan`] rejects anything else with
/// `BadOpcodes`.
///
/// [`BTreeIndex::start_scan`]: crate::index::btree::BTreeIndex::start_scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    LT,
    LTE,
    GTE,
    GT,
}

/// State of an active range scan.
///
/// The cursor borrows, not owns: `page_no` is pinned in the buffer pool
/// for as long as the scan is active, and the cursor merely holds that
/// one usage right. `leaf` caches the decoded content of the pinned
/// page so `scan_next` does not re-decode per entry.
#[derive(Debug)]
pub(crate) struct ScanState {
    pub low: i32,
    pub low_op: Operator,
    pub high: i32,
    pub high_op: Operator,
    /// Currently pinned leaf page.
    pub page_no: PageId,
    /// Offset of the next candidate entry within `leaf`.
    pub entry: usize,
    /// Decoded content of the pinned leaf.
    pub leaf: LeafNode,
}

impl ScanState {
    /// Whether `key` passes all four bound checks of the active range.
    ///
    /// The same predicate drives both the initial positioning and every
    /// `scan_next` step.
    pub fn satisfies(&self, key: i32) -> bool {
        if self.low_op == Operator::GT && key <= self.low {
            return false;
        }
        if self.low_op == Operator::GTE && key < self.low {
            return false;
        }
        if self.high_op == Operator::LT && key >= self.high {
            return false;
        }
        if self.high_op == Operator::LTE && key > self.high {
            return false;
        }
        true
    }

    /// Whether `key` already lies past the high bound, meaning no later
    /// key in leaf order can qualify.
    pub fn past_high(&self, key: i32) -> bool {
        match self.high_op {
            Operator::LT => key >= self.high,
            _ => key > self.high,
        }
    }
}
