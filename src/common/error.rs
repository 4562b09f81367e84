//! Error types for quarrydb.

use std::path::PathBuf;

use thiserror::Error;

use crate::common::{FileId, FrameId, PageId};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in quarrydb.
///
/// A single error type keeps error handling consistent across the buffer
/// pool and the index layer. Buffer pool errors surface to the caller
/// unmodified; the index layer adds its own kinds on top.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from disk operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not exist on disk.
    ///
    /// Index construction relies on this to distinguish open-vs-create.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Requested page has not been allocated in its file.
    #[error("page {0} not found")]
    PageNotFound(PageId),

    /// The file handle was never registered with the buffer pool.
    #[error("file {0} is not registered with the buffer pool")]
    UnknownFile(FileId),

    /// The clock sweep found no evictable frame: every frame is pinned.
    #[error("buffer pool exceeded: no evictable frame")]
    BufferExceeded,

    /// Attempted to unpin a page whose pin count is already zero.
    #[error("page {page} of {file} is not pinned")]
    PageNotPinned { file: FileId, page: PageId },

    /// A flush sweep found a page of the file still pinned.
    #[error("page {page} of {file} is still pinned")]
    PagePinned { file: FileId, page: PageId },

    /// A flush sweep found a frame attributed to the file but marked
    /// invalid. Indicates corrupt buffer pool bookkeeping.
    #[error("invalid {0} encountered during flush")]
    BadBuffer(FrameId),

    /// A page failed its checksum or carries an unexpected type tag.
    #[error("corrupt page {0}")]
    CorruptPage(PageId),

    /// A tuple handed to the index is too short to hold the indexed
    /// attribute.
    #[error("record too short for the indexed attribute")]
    InvalidRecord,

    /// An existing index file does not match the requested relation,
    /// attribute offset, or attribute type.
    #[error("index file {0} does not match the requested index definition")]
    BadIndexInfo(String),

    /// Unsupported operator for a scan bound.
    #[error("bad scan opcode")]
    BadOpcodes,

    /// The scan's low bound exceeds its high bound.
    #[error("bad scan range: low bound exceeds high bound")]
    BadScanrange,

    /// No entry in the index satisfies the scan range.
    #[error("no such key found in scan range")]
    NoSuchKeyFound,

    /// A scan operation was issued with no active scan.
    #[error("scan not initialized")]
    ScanNotInitialized,

    /// The active scan has returned every qualifying entry. This is the
    /// expected termination signal, not a defect.
    #[error("index scan completed")]
    IndexScanCompleted,
}
