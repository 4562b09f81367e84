//! Frame table - maps resident pages to their frames.
//!
//! The [`FrameTable`] is the buffer pool's cache directory: a hash map
//! from `(FileId, PageId)` to the frame currently holding that page. It
//! stays bijective with the set of valid frames; the pool updates it on
//! every load, eviction, flush, and disposal.

use std::collections::HashMap;

use crate::common::{FileId, FrameId, PageId};

/// Hash-indexed page lookup for the buffer pool.
///
/// All operations are expected O(1). A miss is an ordinary `None`, not
/// an error: the pool decides at each call site whether a miss means
/// "fetch from disk" (read) or "nothing to do" (unpin, dispose).
#[derive(Debug, Default)]
pub struct FrameTable {
    map: HashMap<(FileId, PageId), FrameId>,
}

impl FrameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Look up the frame holding `(file, page_no)`, if resident.
    #[inline]
    pub fn lookup(&self, file: FileId, page_no: PageId) -> Option<FrameId> {
        self.map.get(&(file, page_no)).copied()
    }

    /// Register `(file, page_no)` as resident in `frame`.
    ///
    /// Replaces any stale entry for the same page.
    #[inline]
    pub fn insert(&mut self, file: FileId, page_no: PageId, frame: FrameId) {
        self.map.insert((file, page_no), frame);
    }

    /// Remove the entry for `(file, page_no)`, returning the frame it
    /// occupied, or `None` if the page was not resident.
    #[inline]
    pub fn remove(&mut self, file: FileId, page_no: PageId) -> Option<FrameId> {
        self.map.remove(&(file, page_no))
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
