//! Buffer pool management.
//!
//! The buffer pool is the in-memory cache layer between the index and
//! disk. It manages a fixed arena of frames, each holding one page, with
//! clock (second-chance) replacement and explicit pin/unpin reference
//! counting.
//!
//! # Components
//! - [`BufferPool`] - The page cache and clock sweep
//! - [`FrameDescriptor`] - Per-frame metadata (valid/refbit/pin/dirty)
//! - [`FrameTable`] - Hash-indexed lookup from (file, page) to frame
//! - [`BufferPoolStats`] - Performance counters

mod frame;
mod frame_table;
mod pool;
mod stats;

pub use frame::FrameDescriptor;
pub use frame_table::FrameTable;
pub use pool::BufferPool;
pub use stats::BufferPoolStats;
