//! File identifier type.

use std::fmt;

/// Identifies a file registered with the buffer pool.
///
/// The pool hands one out per registered [`DiskManager`] and keys its
/// frame table on `(FileId, PageId)`. Ids are never reused within one
/// pool, so a stale id can only miss, not alias another file.
///
/// [`DiskManager`]: crate::storage::DiskManager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub u64);

impl FileId {
    /// Create a new FileId.
    #[inline]
    pub fn new(id: u64) -> Self {
        FileId(id)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File({})", self.0)
    }
}
