//! B+Tree secondary index over a fixed-width integer attribute.
//!
//! Every node access goes through the injected [`BufferPool`]; the tree
//! never touches storage directly. Descent pins one page at a time and
//! unpins it before advancing, so a traversal holds at most the current
//! page (plus, momentarily, its replacement).

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use tracing::debug;

use crate::buffer::BufferPool;
use crate::common::{Error, FileId, PageId, RecordId, Result};
use crate::index::btree::node::{
    AttrType, InternalNode, LeafNode, MetaPage, Node, INTERNAL_CAPACITY, RELATION_NAME_LEN,
};
use crate::index::btree::scan::{Operator, ScanState};
use crate::index::TupleSource;
use crate::storage::DiskManager;

/// A persistent B+Tree index on one integer attribute of a relation.
///
/// The index lives in its own file: page 0 is the meta page, every
/// other page is a leaf or internal node. The file name is derived
/// deterministically from the relation name and attribute offset, so
/// reopening the same definition finds the same file.
pub struct BTreeIndex {
    pool: Rc<RefCell<BufferPool>>,
    file: FileId,
    index_name: String,
    relation: String,
    attr_byte_offset: u32,
    attr_type: AttrType,
    meta_page_no: PageId,
    root_page_no: PageId,
    /// Internal levels above the leaves; 0 means the root is a leaf.
    height: u32,
    /// Cursor of the active range scan, if any.
    scan: Option<ScanState>,
}

impl BTreeIndex {
    /// Derive the index file name for a relation/attribute pair.
    pub fn index_file_name(relation: &str, attr_byte_offset: u32) -> String {
        format!("{}.{}", relation, attr_byte_offset)
    }

    /// Open an existing index or build a fresh one.
    ///
    /// If the index file exists, its meta page must match the requested
    /// relation, attribute offset, and attribute type. Otherwise the
    /// file is created with an empty root leaf and populated by driving
    /// `source` to exhaustion, inserting one entry per tuple.
    ///
    /// # Errors
    /// - [`Error::BadIndexInfo`] if an existing file's meta page doesn't
    ///   match the requested definition
    /// - [`Error::InvalidRecord`] if a tuple is too short to hold the
    ///   indexed attribute
    /// - Buffer pool and I/O errors pass through unmodified
    pub fn open(
        pool: Rc<RefCell<BufferPool>>,
        dir: &Path,
        relation: &str,
        attr_byte_offset: u32,
        attr_type: AttrType,
        source: &mut dyn TupleSource,
    ) -> Result<BTreeIndex> {
        let index_name = Self::index_file_name(relation, attr_byte_offset);
        let path = dir.join(&index_name);
        // The meta page can only store this much of the name.
        let relation = truncate_name(relation);

        match DiskManager::open(&path) {
            Ok(dm) => {
                let meta_page_no = dm.first_page_no();
                let mut p = pool.borrow_mut();
                let file = p.register_file(dm);

                let frame = p.read_page(file, meta_page_no)?;
                let meta = MetaPage::decode(p.page(frame), meta_page_no)?;
                p.unpin_page(file, meta_page_no, false)?;
                drop(p);

                if meta.relation != relation
                    || meta.attr_byte_offset != attr_byte_offset
                    || meta.attr_type != attr_type
                {
                    return Err(Error::BadIndexInfo(index_name));
                }
                debug!(index = %index_name, root = %meta.root_page_no, "opened existing index");

                Ok(Self {
                    pool,
                    file,
                    index_name,
                    relation,
                    attr_byte_offset,
                    attr_type,
                    meta_page_no,
                    root_page_no: meta.root_page_no,
                    height: meta.height,
                    scan: None,
                })
            }
            Err(Error::FileNotFound(_)) => {
                let dm = DiskManager::create(&path)?;
                let meta_page_no = dm.first_page_no();

                let (file, root_page_no) = {
                    let mut p = pool.borrow_mut();
                    let file = p.register_file(dm);

                    let (meta_pid, meta_frame) = p.alloc_page(file)?;
                    let (root_pid, root_frame) = p.alloc_page(file)?;

                    LeafNode::new().encode(p.page_mut(root_frame));
                    p.unpin_page(file, root_pid, true)?;

                    let meta = MetaPage {
                        relation: relation.clone(),
                        attr_byte_offset,
                        attr_type,
                        root_page_no: root_pid,
                        height: 0,
                    };
                    meta.encode(p.page_mut(meta_frame));
                    p.unpin_page(file, meta_pid, true)?;

                    (file, root_pid)
                };
                debug!(index = %index_name, "created index, populating");

                let mut index = Self {
                    pool,
                    file,
                    index_name,
                    relation,
                    attr_byte_offset,
                    attr_type,
                    meta_page_no,
                    root_page_no,
                    height: 0,
                    scan: None,
                };

                // Exhaustion of the source is the normal end of
                // population, not an error.
                while let Some((rid, tuple)) = source.next_tuple()? {
                    let key = extract_key(&tuple, attr_byte_offset)?;
                    index.insert_entry(key, rid)?;
                }

                Ok(index)
            }
            Err(e) => Err(e),
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a key/record-id pair.
    ///
    /// Descends with the same child-selection rule a scan uses, inserts
    /// in key order, and splits full nodes on the way back up. A root
    /// split allocates a new root and grows the tree by one level.
    /// Duplicate keys are allowed.
    pub fn insert_entry(&mut self, key: i32, rid: RecordId) -> Result<()> {
        let pool = Rc::clone(&self.pool);
        let mut pool = pool.borrow_mut();

        let split = Self::insert_into(&mut pool, self.file, self.root_page_no, key, rid)?;

        if let Some((sep, right)) = split {
            let (new_root, frame) = pool.alloc_page(self.file)?;
            let node = InternalNode {
                level: (self.height + 1).min(u8::MAX as u32) as u8,
                keys: vec![sep],
                children: vec![self.root_page_no, right],
            };
            node.encode(pool.page_mut(frame));
            pool.unpin_page(self.file, new_root, true)?;

            self.root_page_no = new_root;
            self.height += 1;
            self.write_meta(&mut pool)?;
            debug!(index = %self.index_name, root = %new_root, height = self.height, "root split");
        }

        Ok(())
    }

    /// Recursive descent for insertion. Returns the separator key and
    /// page of a newly created right sibling if this subtree split.
    ///
    /// The node is unpinned before recursing into a child and re-pinned
    /// only if the child split, keeping the pin footprint of a descent
    /// at one page.
    fn insert_into(
        pool: &mut BufferPool,
        file: FileId,
        page_no: PageId,
        key: i32,
        rid: RecordId,
    ) -> Result<Option<(i32, PageId)>> {
        let frame = pool.read_page(file, page_no)?;
        let node = Node::decode(pool.page(frame), page_no)?;

        match node {
            Node::Leaf(mut leaf) => {
                if !leaf.is_full() {
                    leaf.insert(key, rid);
                    leaf.encode(pool.page_mut(frame));
                    pool.unpin_page(file, page_no, true)?;
                    return Ok(None);
                }

                // Full leaf: insert, split at the median, link the new
                // right sibling into the chain.
                leaf.insert(key, rid);
                let (sep, right) = leaf.split();

                let (right_pid, right_frame) = pool.alloc_page(file)?;
                leaf.right_sibling = right_pid;

                right.encode(pool.page_mut(right_frame));
                pool.unpin_page(file, right_pid, true)?;
                leaf.encode(pool.page_mut(frame));
                pool.unpin_page(file, page_no, true)?;

                debug!(page = %page_no, sibling = %right_pid, key = sep, "leaf split");
                Ok(Some((sep, right_pid)))
            }
            Node::Internal(internal) => {
                let idx = internal.child_index_for(key);
                let child = internal.children[idx];
                pool.unpin_page(file, page_no, false)?;

                let Some((sep, new_child)) = Self::insert_into(pool, file, child, key, rid)?
                else {
                    return Ok(None);
                };

                // The child split: re-pin this node and splice in the
                // separator. Nothing else can have moved it meanwhile.
                let frame = pool.read_page(file, page_no)?;
                let mut internal = match Node::decode(pool.page(frame), page_no)? {
                    Node::Internal(n) => n,
                    Node::Leaf(_) => {
                        pool.unpin_page(file, page_no, false)?;
                        return Err(Error::CorruptPage(page_no));
                    }
                };

                internal.insert_child(idx, sep, new_child);

                if internal.keys.len() <= INTERNAL_CAPACITY {
                    internal.encode(pool.page_mut(frame));
                    pool.unpin_page(file, page_no, true)?;
                    return Ok(None);
                }

                let (push_up, right) = internal.split();
                let (right_pid, right_frame) = pool.alloc_page(file)?;

                right.encode(pool.page_mut(right_frame));
                pool.unpin_page(file, right_pid, true)?;
                internal.encode(pool.page_mut(frame));
                pool.unpin_page(file, page_no, true)?;

                debug!(page = %page_no, sibling = %right_pid, key = push_up, "internal split");
                Ok(Some((push_up, right_pid)))
            }
        }
    }

    /// Rewrite the meta page after a root change.
    fn write_meta(&self, pool: &mut BufferPool) -> Result<()> {
        let frame = pool.read_page(self.file, self.meta_page_no)?;
        let meta = MetaPage {
            relation: self.relation.clone(),
            attr_byte_offset: self.attr_byte_offset,
            attr_type: self.attr_type,
            root_page_no: self.root_page_no,
            height: self.height,
        };
        meta.encode(pool.page_mut(frame));
        pool.unpin_page(self.file, self.meta_page_no, true)
    }

    // ========================================================================
    // Range scan
    // ========================================================================

    /// Begin a bounded range scan, positioning the cursor on the first
    /// qualifying entry.
    ///
    /// An already active scan is implicitly ended first. The cursor
    /// leaves the chosen leaf pinned until [`end_scan`](Self::end_scan)
    /// or until the scan walks off it.
    ///
    /// # Errors
    /// - [`Error::BadOpcodes`] unless `low_op` is GT/GTE and `high_op`
    ///   is LT/LTE
    /// - [`Error::BadScanrange`] if `low > high`
    /// - [`Error::NoSuchKeyFound`] if no entry satisfies the range
    pub fn start_scan(
        &mut self,
        low: i32,
        low_op: Operator,
        high: i32,
        high_op: Operator,
    ) -> Result<()> {
        if low_op != Operator::GT && low_op != Operator::GTE {
            return Err(Error::BadOpcodes);
        }
        if high_op != Operator::LT && high_op != Operator::LTE {
            return Err(Error::BadOpcodes);
        }
        if low > high {
            return Err(Error::BadScanrange);
        }

        if self.scan.is_some() {
            self.end_scan()?;
        }

        let pool = Rc::clone(&self.pool);
        let mut pool = pool.borrow_mut();

        // Descend to the leaf whose range covers the low bound, one pin
        // at a time.
        let mut page_no = self.root_page_no;
        let mut frame = pool.read_page(self.file, page_no)?;
        let mut leaf = loop {
            match Node::decode(pool.page(frame), page_no)? {
                Node::Leaf(leaf) => break leaf,
                Node::Internal(internal) => {
                    let child = internal.children[internal.child_index_for(low)];
                    pool.unpin_page(self.file, page_no, false)?;
                    page_no = child;
                    frame = pool.read_page(self.file, page_no)?;
                }
            }
        };

        let mut state = ScanState {
            low,
            low_op,
            high,
            high_op,
            page_no,
            entry: 0,
            leaf: LeafNode::new(),
        };

        // Walk leaves left to right until a key qualifies or the range
        // is provably empty.
        loop {
            for (i, &key) in leaf.keys.iter().enumerate() {
                if state.satisfies(key) {
                    state.page_no = page_no;
                    state.entry = i;
                    state.leaf = leaf;
                    self.scan = Some(state);
                    debug!(index = %self.index_name, page = %page_no, entry = i, "scan started");
                    return Ok(());
                }
                if state.past_high(key) {
                    pool.unpin_page(self.file, page_no, false)?;
                    return Err(Error::NoSuchKeyFound);
                }
            }

            // Leaf exhausted below the range (or empty): follow the
            // sibling chain.
            let sibling = leaf.right_sibling;
            pool.unpin_page(self.file, page_no, false)?;
            if !sibling.is_some() {
                return Err(Error::NoSuchKeyFound);
            }
            page_no = sibling;
            frame = pool.read_page(self.file, page_no)?;
            leaf = LeafNode::decode(pool.page(frame), page_no)?;
        }
    }

    /// Return the record id under the cursor and advance it.
    ///
    /// Crossing a leaf boundary unpins the exhausted leaf and pins its
    /// right sibling.
    ///
    /// # Errors
    /// - [`Error::ScanNotInitialized`] if no scan is active
    /// - [`Error::IndexScanCompleted`] when the range is exhausted; the
    ///   scan stays active until [`end_scan`](Self::end_scan)
    pub fn scan_next(&mut self) -> Result<RecordId> {
        let pool = Rc::clone(&self.pool);
        let file = self.file;
        let Some(state) = self.scan.as_mut() else {
            return Err(Error::ScanNotInitialized);
        };
        let mut pool = pool.borrow_mut();

        loop {
            if state.entry < state.leaf.keys.len() {
                let key = state.leaf.keys[state.entry];
                if !state.satisfies(key) {
                    return Err(Error::IndexScanCompleted);
                }
                let rid = state.leaf.rids[state.entry];
                state.entry += 1;
                return Ok(rid);
            }

            // Leaf exhausted: move the pin to the right sibling.
            let sibling = state.leaf.right_sibling;
            if !sibling.is_some() {
                return Err(Error::IndexScanCompleted);
            }
            pool.unpin_page(file, state.page_no, false)?;
            let frame = pool.read_page(file, sibling)?;
            state.leaf = LeafNode::decode(pool.page(frame), sibling)?;
            state.page_no = sibling;
            state.entry = 0;
        }
    }

    /// Terminate the active scan, releasing its pin.
    ///
    /// # Errors
    /// - [`Error::ScanNotInitialized`] if no scan is active
    pub fn end_scan(&mut self) -> Result<()> {
        let Some(state) = self.scan.take() else {
            return Err(Error::ScanNotInitialized);
        };
        self.pool
            .borrow_mut()
            .unpin_page(self.file, state.page_no, false)?;
        debug!(index = %self.index_name, "scan ended");
        Ok(())
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// Name of the index file.
    pub fn name(&self) -> &str {
        &self.index_name
    }

    /// Internal levels above the leaves (0 = root is a leaf).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether a range scan is currently active.
    pub fn is_scan_active(&self) -> bool {
        self.scan.is_some()
    }
}

impl Drop for BTreeIndex {
    /// Release any scan pin and write the index's dirty pages back.
    /// Failures here are swallowed; teardown is best-effort.
    fn drop(&mut self) {
        if let Ok(mut pool) = self.pool.try_borrow_mut() {
            if let Some(state) = self.scan.take() {
                let _ = pool.unpin_page(self.file, state.page_no, false);
            }
            let _ = pool.flush_file(self.file);
        }
    }
}

fn truncate_name(relation: &str) -> String {
    let mut end = relation.len().min(RELATION_NAME_LEN);
    // Back up to a char boundary so multibyte names don't split.
    while !relation.is_char_boundary(end) {
        end -= 1;
    }
    relation[..end].to_string()
}

/// Pull the indexed attribute out of a raw tuple.
fn extract_key(tuple: &[u8], attr_byte_offset: u32) -> Result<i32> {
    let off = attr_byte_offset as usize;
    let bytes = tuple.get(off..off + 4).ok_or(Error::InvalidRecord)?;
    Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
