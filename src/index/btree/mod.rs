//! Persistent B+Tree index.
//!
//! # Components
//! - [`BTreeIndex`] - Index lifecycle, insertion, and range scans
//! - [`Node`] / [`LeafNode`] / [`InternalNode`] / [`MetaPage`] - Typed
//!   page contents with explicit (de)serialization
//! - [`Operator`] - Scan bound comparison operators

mod index;
mod node;
mod scan;

pub use index::BTreeIndex;
pub use node::{AttrType, InternalNode, LeafNode, MetaPage, Node, INTERNAL_CAPACITY, LEAF_CAPACITY};
pub use scan::Operator;
