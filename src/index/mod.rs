//! Secondary index structures.

pub mod btree;

pub use btree::{AttrType, BTreeIndex, Operator};

use crate::common::{RecordId, Result};

/// Source of tuples for bulk-loading an index.
///
/// Implementations hand out `(record id, raw tuple bytes)` pairs until
/// exhausted; `Ok(None)` is the normal end of the stream, not an error.
/// A heap-file scanner is the typical implementation; tests use plain
/// vectors.
pub trait TupleSource {
    /// Produce the next tuple, or `None` when the source is exhausted.
    fn next_tuple(&mut self) -> Result<Option<(RecordId, Vec<u8>)>>;
}
