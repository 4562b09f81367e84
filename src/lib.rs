//! QuarryDB - a disk-backed storage engine fragment: a clock-eviction
//! buffer pool under a persistent B+Tree secondary index.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      QuarryDB                        │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌──────────────────────────────────────────────┐   │
//! │  │            Index Layer (index/)               │   │
//! │  │   BTreeIndex + typed nodes + range scans      │   │
//! │  └──────────────────────────────────────────────┘   │
//! │                        ↓                             │
//! │  ┌──────────────────────────────────────────────┐   │
//! │  │           Buffer Pool (buffer/)               │   │
//! │  │   Clock eviction + pin counts + statistics    │   │
//! │  └──────────────────────────────────────────────┘   │
//! │                        ↓                             │
//! │  ┌──────────────────────────────────────────────┐   │
//! │  │          Storage Layer (storage/)             │   │
//! │  │     DiskManager + Page + PageHeader           │   │
//! │  └──────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FileId, Error, config)
//! - [`buffer`] - Buffer pool with clock replacement
//! - [`storage`] - Disk I/O and page formats
//! - [`index`] - The B+Tree secondary index
//!
//! # Quick Start
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use quarrydb::buffer::BufferPool;
//! use quarrydb::index::{AttrType, BTreeIndex, Operator, TupleSource};
//! use quarrydb::common::{RecordId, Result};
//!
//! struct NoTuples;
//! impl TupleSource for NoTuples {
//!     fn next_tuple(&mut self) -> Result<Option<(RecordId, Vec<u8>)>> {
//!         Ok(None)
//!     }
//! }
//!
//! let pool = Rc::new(RefCell::new(BufferPool::new(128)));
//! let mut index = BTreeIndex::open(
//!     Rc::clone(&pool),
//!     std::path::Path::new("."),
//!     "employees",
//!     8,
//!     AttrType::Int,
//!     &mut NoTuples,
//! )
//! .unwrap();
//!
//! index.insert_entry(42, RecordId::new(7, 0)).unwrap();
//! ```

pub mod buffer;
pub mod common;
pub mod index;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::PAGE_SIZE;
pub use common::{Error, FileId, FrameId, PageId, RecordId, Result};

pub use buffer::{BufferPool, BufferPoolStats};
pub use index::{AttrType, BTreeIndex, Operator, TupleSource};
pub use storage::page::{Page, PageHeader, PageType};
pub use storage::DiskManager;
