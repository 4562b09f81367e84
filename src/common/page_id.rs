//! Page identifier type.

use std::fmt;

/// Identifies a page within a file.
///
/// A `u32` allows 4 billion pages per file; at 4KB per page that caps a
/// single file at 16TB, far beyond what this engine targets.
///
/// Page number 0 is always the first page of a file. The B+Tree reserves
/// it for the meta page, which lets 0 double as the "no sibling" sentinel
/// in leaf nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Sentinel meaning "no page". Used for unset sibling links.
    pub const NONE: PageId = PageId(0);

    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// Whether this id refers to an actual page rather than the sentinel.
    #[inline]
    pub fn is_some(&self) -> bool {
        *self != Self::NONE
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
