//! Typed B+Tree page contents.
//!
//! Every index page is decoded into one of three record types (meta,
//! leaf, or internal) and encoded back before unpinning. Nothing in the
//! tree ever aliases raw page bytes as a struct; the page header's type
//! tag plus a checksum decide how (and whether) a page decodes.
//!
//! # On-page layouts (little-endian, after the 8-byte [`PageHeader`])
//! ```text
//! Meta:      relation[20] | attr_byte_offset u32 | attr_type u8
//!            | root_page_no u32 | height u32
//! Leaf:      key_count u16 | right_sibling u32
//!            | key_count × (key i32, rid [u32,u16])
//! Internal:  key_count u16 | level u8 | pad[3]
//!            | child0 u32 | key_count × (key i32, child u32)
//! ```

use crate::common::config::PAGE_SIZE;
use crate::common::{Error, PageId, RecordId, Result};
use crate::storage::page::{Page, PageHeader, PageType};

/// Fixed width of the relation name field in the meta page.
pub const RELATION_NAME_LEN: usize = 20;

/// Entries per leaf node: one page minus header, count, and sibling
/// link, divided by 10 bytes per (key, rid) pair.
pub const LEAF_CAPACITY: usize = (PAGE_SIZE - PageHeader::SIZE - 2 - 4) / 10;

/// Separator keys per internal node: one page minus header, count,
/// level byte, padding, and the leading child pointer, divided by
/// 8 bytes per (key, child) pair.
pub const INTERNAL_CAPACITY: usize = (PAGE_SIZE - PageHeader::SIZE - 2 - 1 - 3 - 4) / 8;

const LEAF_ENTRIES_OFFSET: usize = PageHeader::SIZE + 2 + 4;
const INTERNAL_ENTRIES_OFFSET: usize = PageHeader::SIZE + 2 + 1 + 3;

/// Type of the indexed attribute.
///
/// Only fixed-width integers are supported; the tag is persisted in the
/// meta page so reopening an index can detect a definition mismatch.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Int = 0,
}

impl AttrType {
    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(AttrType::Int),
            _ => None,
        }
    }
}

/// Contents of page 0 of an index file.
///
/// Written once at creation; the root pointer and height are the only
/// fields that ever change, and only when the root splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPage {
    /// Name of the indexed relation, at most [`RELATION_NAME_LEN`] bytes.
    pub relation: String,
    /// Byte offset of the indexed attribute within a tuple.
    pub attr_byte_offset: u32,
    /// Type of the indexed attribute.
    pub attr_type: AttrType,
    /// Page holding the root node.
    pub root_page_no: PageId,
    /// Number of internal levels above the leaves (0 = root is a leaf).
    pub height: u32,
}

impl MetaPage {
    /// Serialize into `page` and stamp header and checksum.
    pub fn encode(&self, page: &mut Page) {
        page.reset();
        page.set_header(&PageHeader::new(PageType::Meta));

        let data = page.as_mut_slice();
        let name = self.relation.as_bytes();
        let n = name.len().min(RELATION_NAME_LEN);
        data[8..8 + n].copy_from_slice(&name[..n]);

        data[28..32].copy_from_slice(&self.attr_byte_offset.to_le_bytes());
        data[32] = self.attr_type as u8;
        data[33..37].copy_from_slice(&self.root_page_no.0.to_le_bytes());
        data[37..41].copy_from_slice(&self.height.to_le_bytes());

        page.update_checksum();
    }

    /// Deserialize from `page`, validating the type tag and checksum.
    pub fn decode(page: &Page, page_no: PageId) -> Result<Self> {
        if page.header().page_type != PageType::Meta || !page.verify_checksum() {
            return Err(Error::CorruptPage(page_no));
        }

        let data = page.as_slice();
        let name_end = data[8..8 + RELATION_NAME_LEN]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(RELATION_NAME_LEN);
        let relation = String::from_utf8_lossy(&data[8..8 + name_end]).into_owned();

        let attr_byte_offset = u32::from_le_bytes([data[28], data[29], data[30], data[31]]);
        let attr_type = AttrType::from_u8(data[32]).ok_or(Error::CorruptPage(page_no))?;
        let root_page_no = PageId::new(u32::from_le_bytes([data[33], data[34], data[35], data[36]]));
        let height = u32::from_le_bytes([data[37], data[38], data[39], data[40]]);

        Ok(Self {
            relation,
            attr_byte_offset,
            attr_type,
            root_page_no,
            height,
        })
    }
}

/// A leaf node: sorted keys, parallel record ids, and a sibling link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// Strictly ascending within the node; duplicates of one key occupy
    /// adjacent slots.
    pub keys: Vec<i32>,
    /// Record id for each key, parallel to `keys`.
    pub rids: Vec<RecordId>,
    /// Right sibling page, [`PageId::NONE`] if this is the last leaf.
    pub right_sibling: PageId,
}

impl LeafNode {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            rids: Vec::new(),
            right_sibling: PageId::NONE,
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.keys.len() >= LEAF_CAPACITY
    }

    /// Insert maintaining ascending order. A duplicate key goes after
    /// its equals, preserving insertion order of record ids.
    pub fn insert(&mut self, key: i32, rid: RecordId) {
        let pos = self.keys.partition_point(|&k| k <= key);
        self.keys.insert(pos, key);
        self.rids.insert(pos, rid);
    }

    /// Right-biased split: the upper half (including the median entry)
    /// moves to a new node. Returns the separator (the first key of the
    /// new right node) and the node itself. The caller wires up sibling
    /// links and page allocation.
    pub fn split(&mut self) -> (i32, LeafNode) {
        let mid = self.keys.len() / 2;
        let right = LeafNode {
            keys: self.keys.split_off(mid),
            rids: self.rids.split_off(mid),
            right_sibling: self.right_sibling,
        };
        (right.keys[0], right)
    }

    /// Serialize into `page` and stamp header and checksum.
    pub fn encode(&self, page: &mut Page) {
        debug_assert_eq!(self.keys.len(), self.rids.len());
        debug_assert!(self.keys.len() <= LEAF_CAPACITY);

        page.reset();
        page.set_header(&PageHeader::new(PageType::BTreeLeaf));

        let data = page.as_mut_slice();
        data[8..10].copy_from_slice(&(self.keys.len() as u16).to_le_bytes());
        data[10..14].copy_from_slice(&self.right_sibling.0.to_le_bytes());

        let mut off = LEAF_ENTRIES_OFFSET;
        for (key, rid) in self.keys.iter().zip(&self.rids) {
            data[off..off + 4].copy_from_slice(&key.to_le_bytes());
            rid.write_to(&mut data[off + 4..off + 10]);
            off += 10;
        }

        page.update_checksum();
    }

    /// Deserialize from `page`, validating the type tag and checksum.
    pub fn decode(page: &Page, page_no: PageId) -> Result<Self> {
        if page.header().page_type != PageType::BTreeLeaf || !page.verify_checksum() {
            return Err(Error::CorruptPage(page_no));
        }

        let data = page.as_slice();
        let count = u16::from_le_bytes([data[8], data[9]]) as usize;
        if count > LEAF_CAPACITY {
            return Err(Error::CorruptPage(page_no));
        }
        let right_sibling = PageId::new(u32::from_le_bytes([data[10], data[11], data[12], data[13]]));

        let mut keys = Vec::with_capacity(count);
        let mut rids = Vec::with_capacity(count);
        let mut off = LEAF_ENTRIES_OFFSET;
        for _ in 0..count {
            keys.push(i32::from_le_bytes([
                data[off],
                data[off + 1],
                data[off + 2],
                data[off + 3],
            ]));
            rids.push(RecordId::read_from(&data[off + 4..off + 10]));
            off += 10;
        }

        Ok(Self {
            keys,
            rids,
            right_sibling,
        })
    }
}

impl Default for LeafNode {
    fn default() -> Self {
        Self::new()
    }
}

/// An internal node: separator keys and child pointers.
///
/// `children` always holds one more entry than `keys`; child `i` covers
/// keys in `[keys[i-1], keys[i])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    /// Distance to the leaves: 1 means the children are leaves.
    pub level: u8,
    pub keys: Vec<i32>,
    pub children: Vec<PageId>,
}

impl InternalNode {
    #[inline]
    pub fn is_full(&self) -> bool {
        self.keys.len() >= INTERNAL_CAPACITY
    }

    /// Index of the child whose key range covers `key`: the rightmost
    /// child whose preceding separator is ≤ `key`.
    pub fn child_index_for(&self, key: i32) -> usize {
        self.keys.partition_point(|&k| k <= key)
    }

    /// Splice in the result of a child split: separator `key` at
    /// position `idx`, the new right child just after the old one.
    pub fn insert_child(&mut self, idx: usize, key: i32, child: PageId) {
        self.keys.insert(idx, key);
        self.children.insert(idx + 1, child);
    }

    /// Right-biased split. The median separator moves *up*, not right:
    /// it is returned for the parent and appears in neither half.
    pub fn split(&mut self) -> (i32, InternalNode) {
        let mid = self.keys.len() / 2;
        let push_up = self.keys[mid];
        let right = InternalNode {
            level: self.level,
            keys: self.keys.split_off(mid + 1),
            children: self.children.split_off(mid + 1),
        };
        self.keys.truncate(mid);
        (push_up, right)
    }

    /// Serialize into `page` and stamp header and checksum.
    pub fn encode(&self, page: &mut Page) {
        debug_assert_eq!(self.children.len(), self.keys.len() + 1);
        debug_assert!(self.keys.len() <= INTERNAL_CAPACITY);

        page.reset();
        page.set_header(&PageHeader::new(PageType::BTreeInternal));

        let data = page.as_mut_slice();
        data[8..10].copy_from_slice(&(self.keys.len() as u16).to_le_bytes());
        data[10] = self.level;

        let mut off = INTERNAL_ENTRIES_OFFSET;
        data[off..off + 4].copy_from_slice(&self.children[0].0.to_le_bytes());
        off += 4;
        for (key, child) in self.keys.iter().zip(&self.children[1..]) {
            data[off..off + 4].copy_from_slice(&key.to_le_bytes());
            data[off + 4..off + 8].copy_from_slice(&child.0.to_le_bytes());
            off += 8;
        }

        page.update_checksum();
    }

    /// Deserialize from `page`, validating the type tag and checksum.
    pub fn decode(page: &Page, page_no: PageId) -> Result<Self> {
        if page.header().page_type != PageType::BTreeInternal || !page.verify_checksum() {
            return Err(Error::CorruptPage(page_no));
        }

        let data = page.as_slice();
        let count = u16::from_le_bytes([data[8], data[9]]) as usize;
        if count > INTERNAL_CAPACITY {
            return Err(Error::CorruptPage(page_no));
        }
        let level = data[10];

        let mut off = INTERNAL_ENTRIES_OFFSET;
        let mut children = Vec::with_capacity(count + 1);
        children.push(PageId::new(u32::from_le_bytes([
            data[off],
            data[off + 1],
            data[off + 2],
            data[off + 3],
        ])));
        off += 4;

        let mut keys = Vec::with_capacity(count);
        for _ in 0..count {
            keys.push(i32::from_le_bytes([
                data[off],
                data[off + 1],
                data[off + 2],
                data[off + 3],
            ]));
            children.push(PageId::new(u32::from_le_bytes([
                data[off + 4],
                data[off + 5],
                data[off + 6],
                data[off + 7],
            ])));
            off += 8;
        }

        Ok(Self {
            level,
            keys,
            children,
        })
    }
}

/// A decoded tree page: either variant, dispatched on the page type tag.
///
/// Traversal matches exhaustively on this instead of casting bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Internal(InternalNode),
}

impl Node {
    /// Decode a tree page of either kind.
    pub fn decode(page: &Page, page_no: PageId) -> Result<Node> {
        match page.header().page_type {
            PageType::BTreeLeaf => Ok(Node::Leaf(LeafNode::decode(page, page_no)?)),
            PageType::BTreeInternal => Ok(Node::Internal(InternalNode::decode(page, page_no)?)),
            _ => Err(Error::CorruptPage(page_no)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacities_fit_one_page() {
        assert_eq!(LEAF_CAPACITY, 408);
        assert_eq!(INTERNAL_CAPACITY, 509);
        assert!(LEAF_ENTRIES_OFFSET + LEAF_CAPACITY * 10 <= PAGE_SIZE);
        assert!(INTERNAL_ENTRIES_OFFSET + 4 + INTERNAL_CAPACITY * 8 <= PAGE_SIZE);
    }

    #[test]
    fn test_meta_roundtrip() {
        let meta = MetaPage {
            relation: "employees".to_string(),
            attr_byte_offset: 12,
            attr_type: AttrType::Int,
            root_page_no: PageId::new(7),
            height: 2,
        };

        let mut page = Page::new();
        meta.encode(&mut page);

        let decoded = MetaPage::decode(&page, PageId::new(0)).unwrap();
        assert_eq!(decoded, meta);
    }

    #[test]
    fn test_meta_rejects_wrong_page_type() {
        let mut page = Page::new();
        LeafNode::new().encode(&mut page);

        assert!(matches!(
            MetaPage::decode(&page, PageId::new(0)),
            Err(Error::CorruptPage(_))
        ));
    }

    #[test]
    fn test_leaf_ordered_insert() {
        let mut leaf = LeafNode::new();
        for (i, key) in [5, 1, 9, 5, 3].iter().enumerate() {
            leaf.insert(*key, RecordId::new(i as u32 + 1, 0));
        }

        assert_eq!(leaf.keys, vec![1, 3, 5, 5, 9]);
        // The duplicate 5 inserted later sits after the earlier one.
        assert_eq!(leaf.rids[2], RecordId::new(1, 0));
        assert_eq!(leaf.rids[3], RecordId::new(4, 0));
    }

    #[test]
    fn test_leaf_roundtrip() {
        let mut leaf = LeafNode::new();
        leaf.right_sibling = PageId::new(12);
        for i in 0..50 {
            leaf.insert(i * 2, RecordId::new(i as u32, (i % 8) as u16));
        }

        let mut page = Page::new();
        leaf.encode(&mut page);

        let decoded = LeafNode::decode(&page, PageId::new(3)).unwrap();
        assert_eq!(decoded, leaf);
    }

    #[test]
    fn test_leaf_split_right_biased() {
        let mut leaf = LeafNode::new();
        for i in 0..5 {
            leaf.insert(i, RecordId::new(i as u32, 0));
        }

        let (sep, right) = leaf.split();

        assert_eq!(leaf.keys, vec![0, 1]);
        assert_eq!(right.keys, vec![2, 3, 4]);
        assert_eq!(sep, 2);
    }

    #[test]
    fn test_leaf_split_carries_sibling_link() {
        let mut leaf = LeafNode::new();
        leaf.right_sibling = PageId::new(99);
        for i in 0..4 {
            leaf.insert(i, RecordId::new(0, 0));
        }

        let (_, right) = leaf.split();
        assert_eq!(right.right_sibling, PageId::new(99));
    }

    #[test]
    fn test_internal_child_selection() {
        let node = InternalNode {
            level: 1,
            keys: vec![10, 20, 30],
            children: vec![
                PageId::new(1),
                PageId::new(2),
                PageId::new(3),
                PageId::new(4),
            ],
        };

        assert_eq!(node.child_index_for(5), 0);
        // A key equal to a separator belongs to the right child.
        assert_eq!(node.child_index_for(10), 1);
        assert_eq!(node.child_index_for(19), 1);
        assert_eq!(node.child_index_for(25), 2);
        assert_eq!(node.child_index_for(30), 3);
        assert_eq!(node.child_index_for(1000), 3);
    }

    #[test]
    fn test_internal_insert_child() {
        let mut node = InternalNode {
            level: 1,
            keys: vec![10, 30],
            children: vec![PageId::new(1), PageId::new(2), PageId::new(3)],
        };

        node.insert_child(1, 20, PageId::new(4));

        assert_eq!(node.keys, vec![10, 20, 30]);
        assert_eq!(
            node.children,
            vec![
                PageId::new(1),
                PageId::new(2),
                PageId::new(4),
                PageId::new(3)
            ]
        );
    }

    #[test]
    fn test_internal_split_pushes_median_up() {
        let mut node = InternalNode {
            level: 2,
            keys: vec![10, 20, 30, 40, 50],
            children: (1..=6).map(PageId::new).collect(),
        };

        let (push_up, right) = node.split();

        assert_eq!(push_up, 30);
        assert_eq!(node.keys, vec![10, 20]);
        assert_eq!(node.children, (1..=3).map(PageId::new).collect::<Vec<_>>());
        assert_eq!(right.keys, vec![40, 50]);
        assert_eq!(right.children, (4..=6).map(PageId::new).collect::<Vec<_>>());
        assert_eq!(right.level, 2);
    }

    #[test]
    fn test_internal_roundtrip() {
        let node = InternalNode {
            level: 1,
            keys: vec![-5, 0, 17],
            children: (10..=13).map(PageId::new).collect(),
        };

        let mut page = Page::new();
        node.encode(&mut page);

        let decoded = InternalNode::decode(&page, PageId::new(4)).unwrap();
        assert_eq!(decoded, node);
    }

    #[test]
    fn test_node_decode_dispatches_on_tag() {
        let mut page = Page::new();
        LeafNode::new().encode(&mut page);
        assert!(matches!(
            Node::decode(&page, PageId::new(1)),
            Ok(Node::Leaf(_))
        ));

        let node = InternalNode {
            level: 1,
            keys: vec![1],
            children: vec![PageId::new(1), PageId::new(2)],
        };
        node.encode(&mut page);
        assert!(matches!(
            Node::decode(&page, PageId::new(1)),
            Ok(Node::Internal(_))
        ));
    }

    #[test]
    fn test_node_decode_rejects_corruption() {
        let mut page = Page::new();
        LeafNode::new().encode(&mut page);
        page.as_mut_slice()[100] ^= 0xFF;

        assert!(matches!(
            Node::decode(&page, PageId::new(1)),
            Err(Error::CorruptPage(_))
        ));
    }
}
