//! Buffer pool - the core page caching layer.
//!
//! The [`BufferPool`] provides:
//! - Page caching between disk and memory
//! - Pin-based reference counting
//! - Sticky dirty tracking with write-back on eviction
//! - Clock (second-chance) replacement
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        BufferPool                         │
//! │  ┌───────────────┐  ┌──────────────────────────────────┐  │
//! │  │  frame table  │  │       frames: Vec<Page>          │  │
//! │  │ (File,Page)→F │─▶│  [Page0] [Page1] [Page2] ...     │  │
//! │  └───────────────┘  └──────────────────────────────────┘  │
//! │  ┌───────────────┐  ┌──────────────────────────────────┐  │
//! │  │  clock_hand   │  │ descriptors: Vec<FrameDescriptor>│  │
//! │  └───────────────┘  └──────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────┐    │
//! │  │        files: HashMap<FileId, DiskManager>        │    │
//! │  └───────────────────────────────────────────────────┘    │
//! └───────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::buffer::{BufferPoolStats, FrameDescriptor, FrameTable};
use crate::common::{Error, FileId, FrameId, PageId, Result};
use crate::storage::page::Page;
use crate::storage::DiskManager;

/// Manages a fixed pool of frames caching pages of registered files.
///
/// The pool owns all frame memory and every [`DiskManager`] registered
/// with it, so eviction can write back a dirty page no matter which file
/// it belongs to. Callers address pages by `(FileId, PageId)` and hold
/// pins explicitly: [`read_page`](BufferPool::read_page) pins, and every
/// pin must be paired with an [`unpin_page`](BufferPool::unpin_page).
///
/// # Concurrency
/// Single-threaded by design. Every method takes `&mut self`; callers
/// must serialize access externally if they need sharing.
pub struct BufferPool {
    /// Frame arena, allocated once at construction and recycled forever.
    frames: Vec<Page>,

    /// Per-frame metadata, parallel to `frames`.
    descriptors: Vec<FrameDescriptor>,

    /// Maps resident `(file, page)` pairs to frames.
    table: FrameTable,

    /// Registered files, keyed by the id handed out at registration.
    files: HashMap<FileId, DiskManager>,

    /// Next id to hand out. Never reused.
    next_file_id: u64,

    /// Current position of the clock sweep in `[0, num_bufs)`.
    clock_hand: usize,

    /// Performance counters.
    stats: BufferPoolStats,

    /// Number of frames (immutable after construction).
    num_bufs: usize,
}

impl BufferPool {
    /// Create a buffer pool with `num_bufs` frames.
    ///
    /// # Panics
    /// Panics if `num_bufs` is 0.
    pub fn new(num_bufs: usize) -> Self {
        assert!(num_bufs > 0, "num_bufs must be > 0");

        Self {
            frames: (0..num_bufs).map(|_| Page::new()).collect(),
            descriptors: (0..num_bufs).map(|_| FrameDescriptor::new()).collect(),
            table: FrameTable::new(),
            files: HashMap::new(),
            next_file_id: 0,
            // Starts on the last frame so the first advance lands on 0.
            clock_hand: num_bufs - 1,
            stats: BufferPoolStats::new(),
            num_bufs,
        }
    }

    // ========================================================================
    // File registry
    // ========================================================================

    /// Take ownership of a file and return the id to address it by.
    pub fn register_file(&mut self, file: DiskManager) -> FileId {
        let id = FileId::new(self.next_file_id);
        self.next_file_id += 1;
        debug!(file = %id, path = %file.path().display(), "registered file");
        self.files.insert(id, file);
        id
    }

    /// Direct access to a registered file, mainly for allocation checks.
    pub fn file(&self, file: FileId) -> Option<&DiskManager> {
        self.files.get(&file)
    }

    /// Flush a file's resident pages and hand its [`DiskManager`] back.
    ///
    /// After this the id is dead; ids are never reused.
    ///
    /// # Errors
    /// Same conditions as [`flush_file`](BufferPool::flush_file); on
    /// error the file stays registered.
    pub fn unregister_file(&mut self, file: FileId) -> Result<DiskManager> {
        self.flush_file(file)?;
        debug!(%file, "unregistered file");
        self.files.remove(&file).ok_or(Error::UnknownFile(file))
    }

    // ========================================================================
    // Public API: pin-protected page access
    // ========================================================================

    /// Read a page, pinning its frame.
    ///
    /// On a frame table hit the resident content is returned with no I/O:
    /// the reference bit is set and the pin count incremented. On a miss
    /// a frame is claimed via the clock sweep, the page is physically
    /// read, and the descriptor is initialized pinned-once.
    ///
    /// # Errors
    /// - [`Error::BufferExceeded`] if every frame is pinned
    /// - [`Error::UnknownFile`] if `file` was never registered
    /// - I/O errors from the physical read
    pub fn read_page(&mut self, file: FileId, page_no: PageId) -> Result<FrameId> {
        if let Some(frame) = self.table.lookup(file, page_no) {
            let desc = &mut self.descriptors[frame.0];
            desc.set_refbit();
            desc.pin();
            self.stats.cache_hits += 1;
            trace!(%file, page = %page_no, %frame, "cache hit");
            return Ok(frame);
        }

        self.stats.cache_misses += 1;
        let frame = self.alloc_buf()?;

        let dm = self.files.get_mut(&file).ok_or(Error::UnknownFile(file))?;
        self.frames[frame.0] = dm.read_page(page_no)?;
        self.stats.pages_read += 1;

        self.table.insert(file, page_no, frame);
        self.descriptors[frame.0].set(file, page_no);
        trace!(%file, page = %page_no, %frame, "cache miss, loaded from disk");

        Ok(frame)
    }

    /// Content of a pinned frame.
    ///
    /// The frame id must come from a pin-granting call whose pin is still
    /// held; the pool does not hand out references to unpinned frames.
    #[inline]
    pub fn page(&self, frame: FrameId) -> &Page {
        debug_assert!(self.descriptors[frame.0].is_pinned());
        &self.frames[frame.0]
    }

    /// Mutable content of a pinned frame.
    ///
    /// Mutation alone does not mark the frame dirty; pass `dirty = true`
    /// to the matching [`unpin_page`](BufferPool::unpin_page).
    #[inline]
    pub fn page_mut(&mut self, frame: FrameId) -> &mut Page {
        debug_assert!(self.descriptors[frame.0].is_pinned());
        &mut self.frames[frame.0]
    }

    /// Release one pin on a page, optionally marking it dirty.
    ///
    /// The dirty flag is a sticky OR: once set it survives later clean
    /// unpins until a flush or eviction writes the page back. Unpinning a
    /// page that is not resident is tolerated silently.
    ///
    /// # Errors
    /// - [`Error::PageNotPinned`] if the pin count is already zero
    pub fn unpin_page(&mut self, file: FileId, page_no: PageId, dirty: bool) -> Result<()> {
        let Some(frame) = self.table.lookup(file, page_no) else {
            // Not resident: redundant unpins are tolerated.
            return Ok(());
        };

        let desc = &mut self.descriptors[frame.0];
        if !desc.is_pinned() {
            return Err(Error::PageNotPinned {
                file,
                page: page_no,
            });
        }
        desc.unpin();
        if dirty {
            desc.mark_dirty();
        }
        Ok(())
    }

    /// Allocate a new page in `file` and pin it in a frame.
    ///
    /// Returns the new page number and the frame holding its zeroed,
    /// pinned content.
    ///
    /// # Errors
    /// - [`Error::UnknownFile`] if `file` was never registered
    /// - [`Error::BufferExceeded`] if every frame is pinned
    /// - I/O errors from the disk allocation
    pub fn alloc_page(&mut self, file: FileId) -> Result<(PageId, FrameId)> {
        let dm = self.files.get_mut(&file).ok_or(Error::UnknownFile(file))?;
        let page_no = dm.allocate_page()?;

        let frame = self.alloc_buf()?;
        self.frames[frame.0].reset();
        self.table.insert(file, page_no, frame);
        self.descriptors[frame.0].set(file, page_no);
        trace!(%file, page = %page_no, %frame, "allocated page");

        Ok((page_no, frame))
    }

    /// Write back and release every resident page of `file`.
    ///
    /// Dirty pages are written to disk; every descriptor of the file is
    /// cleared and its frame table entry removed. The first violation
    /// encountered aborts the remaining sweep.
    ///
    /// # Errors
    /// - [`Error::PagePinned`] if any page of the file is still pinned
    /// - [`Error::BadBuffer`] if a frame of the file is marked invalid
    /// - [`Error::UnknownFile`] if `file` was never registered
    pub fn flush_file(&mut self, file: FileId) -> Result<()> {
        if !self.files.contains_key(&file) {
            return Err(Error::UnknownFile(file));
        }

        for i in 0..self.num_bufs {
            if self.descriptors[i].file() != Some(file) {
                continue;
            }

            let page_no = self.descriptors[i].page_no();
            if self.descriptors[i].is_pinned() {
                return Err(Error::PagePinned {
                    file,
                    page: page_no,
                });
            }
            if !self.descriptors[i].is_valid() {
                return Err(Error::BadBuffer(FrameId::new(i)));
            }

            if self.descriptors[i].is_dirty() {
                let dm = self.files.get_mut(&file).ok_or(Error::UnknownFile(file))?;
                dm.write_page(page_no, &self.frames[i])?;
                self.descriptors[i].clear_dirty();
                self.stats.pages_written += 1;
            }

            self.table.remove(file, page_no);
            self.descriptors[i].clear();
        }

        debug!(%file, "flushed file");
        Ok(())
    }

    /// Delete a page from its file, discarding any cached copy.
    ///
    /// The on-disk page is deleted unconditionally. If the page is also
    /// resident, its frame table entry and descriptor are dropped without
    /// a flush: the content is being discarded, not persisted.
    ///
    /// # Errors
    /// - [`Error::UnknownFile`] if `file` was never registered
    /// - I/O errors from the disk deletion
    pub fn dispose_page(&mut self, file: FileId, page_no: PageId) -> Result<()> {
        let dm = self.files.get_mut(&file).ok_or(Error::UnknownFile(file))?;
        dm.delete_page(page_no)?;

        if let Some(frame) = self.table.remove(file, page_no) {
            self.descriptors[frame.0].clear();
        }
        Ok(())
    }

    // ========================================================================
    // Public API: stats and info
    // ========================================================================

    /// Get buffer pool statistics.
    pub fn stats(&self) -> &BufferPoolStats {
        &self.stats
    }

    /// Get the pool size.
    pub fn pool_size(&self) -> usize {
        self.num_bufs
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.table.len()
    }

    /// Pin count of a page, if it is resident.
    pub fn pin_count(&self, file: FileId, page_no: PageId) -> Option<u32> {
        self.table
            .lookup(file, page_no)
            .map(|f| self.descriptors[f.0].pin_count())
    }

    // ========================================================================
    // Internal: clock sweep
    // ========================================================================

    #[inline]
    fn advance_clock(&mut self) {
        self.clock_hand = (self.clock_hand + 1) % self.num_bufs;
    }

    /// Claim a frame via the clock (second-chance) sweep.
    ///
    /// Visits at most `2 × num_bufs` frames, advancing the hand before
    /// each inspection. An invalid frame is taken immediately. A valid
    /// frame with its reference bit set gets a second chance; a pinned
    /// frame is skipped; anything else is evicted, with a write-back
    /// first if dirty.
    ///
    /// The caller owns the returned frame: the selecting sweep already
    /// removed the victim's frame table entry and cleared its
    /// descriptor, so the frame comes back invalid either way and
    /// `set()` is the only path to a valid descriptor. A failure after
    /// selection (a bad physical read, say) leaves the pool consistent.
    ///
    /// # Errors
    /// - [`Error::BufferExceeded`] if no frame is claimable within the
    ///   sweep bound (all frames pinned)
    fn alloc_buf(&mut self) -> Result<FrameId> {
        for _ in 0..2 * self.num_bufs {
            self.advance_clock();
            let hand = self.clock_hand;

            if !self.descriptors[hand].is_valid() {
                return Ok(FrameId::new(hand));
            }

            if self.descriptors[hand].refbit() {
                // Second chance.
                self.descriptors[hand].clear_refbit();
                continue;
            }

            if self.descriptors[hand].is_pinned() {
                continue;
            }

            // Valid, unpinned, reference bit clear: evict.
            let Some(file) = self.descriptors[hand].file() else {
                // A valid frame without an owning file is corrupt
                // bookkeeping, same as flush_file treats it.
                return Err(Error::BadBuffer(FrameId::new(hand)));
            };
            let page_no = self.descriptors[hand].page_no();

            if self.descriptors[hand].is_dirty() {
                let dm = self.files.get_mut(&file).ok_or(Error::UnknownFile(file))?;
                dm.write_page(page_no, &self.frames[hand])?;
                self.descriptors[hand].clear_dirty();
                self.stats.pages_written += 1;
            }

            self.table.remove(file, page_no);
            self.descriptors[hand].clear();
            self.stats.evictions += 1;
            debug!(%file, page = %page_no, frame = hand, "evicted page");
            return Ok(FrameId::new(hand));
        }

        Err(Error::BufferExceeded)
    }
}

impl Drop for BufferPool {
    /// Best-effort write-back of every dirty frame before the pool's
    /// storage is released. Write failures here are swallowed.
    fn drop(&mut self) {
        for i in 0..self.num_bufs {
            if !self.descriptors[i].is_valid() || !self.descriptors[i].is_dirty() {
                continue;
            }
            let Some(file) = self.descriptors[i].file() else {
                continue;
            };
            if let Some(dm) = self.files.get_mut(&file) {
                let _ = dm.write_page(self.descriptors[i].page_no(), &self.frames[i]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Pool plus one registered file with `pages` pre-allocated pages.
    fn create_pool(num_bufs: usize, pages: u32) -> (BufferPool, FileId, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let mut dm = DiskManager::create(dir.path().join("test.db")).unwrap();
        for _ in 0..pages {
            dm.allocate_page().unwrap();
        }
        let mut pool = BufferPool::new(num_bufs);
        let file = pool.register_file(dm);
        (pool, file, dir)
    }

    #[test]
    fn test_read_page_pins() {
        let (mut pool, file, _dir) = create_pool(4, 2);

        let frame = pool.read_page(file, PageId::new(0)).unwrap();
        assert_eq!(pool.pin_count(file, PageId::new(0)), Some(1));

        // A second read of the same page reuses the frame and re-pins.
        let frame2 = pool.read_page(file, PageId::new(0)).unwrap();
        assert_eq!(frame, frame2);
        assert_eq!(pool.pin_count(file, PageId::new(0)), Some(2));
        assert_eq!(pool.stats().cache_hits, 1);
        assert_eq!(pool.stats().pages_read, 1);
    }

    #[test]
    fn test_unpin_to_zero_then_error() {
        let (mut pool, file, _dir) = create_pool(4, 1);
        let pid = PageId::new(0);

        pool.read_page(file, pid).unwrap();
        pool.read_page(file, pid).unwrap();

        pool.unpin_page(file, pid, false).unwrap();
        pool.unpin_page(file, pid, false).unwrap();

        match pool.unpin_page(file, pid, false) {
            Err(Error::PageNotPinned { page, .. }) => assert_eq!(page, pid),
            other => panic!("expected PageNotPinned, got {:?}", other),
        }
    }

    #[test]
    fn test_unpin_nonresident_is_silent() {
        let (mut pool, file, _dir) = create_pool(4, 1);
        pool.unpin_page(file, PageId::new(0), true).unwrap();
    }

    #[test]
    fn test_dirty_flag_is_sticky() {
        let (mut pool, file, _dir) = create_pool(4, 1);
        let pid = PageId::new(0);

        pool.read_page(file, pid).unwrap();
        pool.read_page(file, pid).unwrap();

        pool.unpin_page(file, pid, true).unwrap();
        // Clean unpin afterwards must not erase the dirty flag.
        pool.unpin_page(file, pid, false).unwrap();

        let frame = pool.table.lookup(file, pid).unwrap();
        assert!(pool.descriptors[frame.0].is_dirty());
    }

    #[test]
    fn test_all_pinned_exceeds_buffer() {
        let (mut pool, file, _dir) = create_pool(2, 3);

        pool.read_page(file, PageId::new(0)).unwrap();
        pool.read_page(file, PageId::new(1)).unwrap();

        match pool.read_page(file, PageId::new(2)) {
            Err(Error::BufferExceeded) => {}
            other => panic!("expected BufferExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_clock_victim_order_is_deterministic() {
        let (mut pool, file, _dir) = create_pool(2, 3);
        let (a, b, c) = (PageId::new(0), PageId::new(1), PageId::new(2));

        pool.read_page(file, a).unwrap();
        pool.unpin_page(file, a, false).unwrap();
        pool.read_page(file, b).unwrap();

        // A's refbit is cleared on the first pass and A is selected on
        // the next; B stays pinned and resident.
        pool.read_page(file, c).unwrap();
        assert_eq!(pool.pin_count(file, a), None);
        assert_eq!(pool.pin_count(file, b), Some(1));
        assert_eq!(pool.pin_count(file, c), Some(1));
        assert_eq!(pool.stats().evictions, 1);
    }

    #[test]
    fn test_failed_read_after_eviction_releases_victim_frame() {
        let (mut pool, file, _dir) = create_pool(2, 2);
        let (a, b) = (PageId::new(0), PageId::new(1));

        pool.read_page(file, a).unwrap();
        pool.unpin_page(file, a, false).unwrap();
        pool.read_page(file, b).unwrap();
        pool.unpin_page(file, b, false).unwrap();

        // The sweep picks a victim before the physical read, which then
        // fails on the unallocated page number.
        assert!(matches!(
            pool.read_page(file, PageId::new(99)),
            Err(Error::PageNotFound(_))
        ));

        // The victim's frame must come back invalid, leaving no stale
        // descriptor behind: the evicted page re-reads into exactly one
        // frame and a full flush succeeds.
        pool.read_page(file, a).unwrap();
        pool.unpin_page(file, a, false).unwrap();
        pool.flush_file(file).unwrap();
        assert_eq!(pool.resident_count(), 0);

        // With no caller pins outstanding, both frames are claimable.
        pool.read_page(file, a).unwrap();
        pool.read_page(file, b).unwrap();
    }

    #[test]
    fn test_eviction_writes_back_dirty_page() {
        let (mut pool, file, _dir) = create_pool(1, 2);
        let pid = PageId::new(0);

        let frame = pool.read_page(file, pid).unwrap();
        pool.page_mut(frame).as_mut_slice()[0] = 0x42;
        pool.unpin_page(file, pid, true).unwrap();

        // Loading another page through the single frame evicts page 0.
        let frame = pool.read_page(file, PageId::new(1)).unwrap();
        pool.unpin_page(file, PageId::new(1), false).unwrap();
        let _ = frame;

        // Re-read page 0: the eviction must have persisted the write.
        let frame = pool.read_page(file, pid).unwrap();
        assert_eq!(pool.page(frame).as_slice()[0], 0x42);
    }

    #[test]
    fn test_alloc_page_returns_pinned_zeroed_frame() {
        let (mut pool, file, _dir) = create_pool(4, 0);

        let (pid, frame) = pool.alloc_page(file).unwrap();
        assert_eq!(pid, PageId::new(0));
        assert_eq!(pool.pin_count(file, pid), Some(1));
        assert!(pool.page(frame).as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_flush_file_writes_and_unregisters_frames() {
        let (mut pool, file, _dir) = create_pool(4, 2);

        let frame = pool.read_page(file, PageId::new(0)).unwrap();
        pool.page_mut(frame).as_mut_slice()[9] = 0xAA;
        pool.unpin_page(file, PageId::new(0), true).unwrap();
        pool.read_page(file, PageId::new(1)).unwrap();
        pool.unpin_page(file, PageId::new(1), false).unwrap();

        pool.flush_file(file).unwrap();
        assert_eq!(pool.resident_count(), 0);
        assert_eq!(pool.stats().pages_written, 1);

        // The dirty page reached disk.
        let frame = pool.read_page(file, PageId::new(0)).unwrap();
        assert_eq!(pool.page(frame).as_slice()[9], 0xAA);
    }

    #[test]
    fn test_flush_file_fails_on_pinned_page() {
        let (mut pool, file, _dir) = create_pool(4, 1);

        pool.read_page(file, PageId::new(0)).unwrap();

        match pool.flush_file(file) {
            Err(Error::PagePinned { page, .. }) => assert_eq!(page, PageId::new(0)),
            other => panic!("expected PagePinned, got {:?}", other),
        }
    }

    #[test]
    fn test_dispose_page_discards_cached_copy() {
        let (mut pool, file, _dir) = create_pool(4, 1);
        let pid = PageId::new(0);

        let frame = pool.read_page(file, pid).unwrap();
        pool.page_mut(frame).as_mut_slice()[0] = 0x55;
        pool.unpin_page(file, pid, true).unwrap();

        pool.dispose_page(file, pid).unwrap();
        assert_eq!(pool.resident_count(), 0);

        // The dirty content was discarded, not flushed.
        let frame = pool.read_page(file, pid).unwrap();
        assert_eq!(pool.page(frame).as_slice()[0], 0);
    }

    #[test]
    fn test_drop_flushes_dirty_frames() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let mut dm = DiskManager::create(&path).unwrap();
            dm.allocate_page().unwrap();
            let mut pool = BufferPool::new(2);
            let file = pool.register_file(dm);

            let frame = pool.read_page(file, PageId::new(0)).unwrap();
            pool.page_mut(frame).as_mut_slice()[3] = 0x77;
            pool.unpin_page(file, PageId::new(0), true).unwrap();
            // Pool dropped here with the dirty page still resident.
        }

        let mut dm = DiskManager::open(&path).unwrap();
        let page = dm.read_page(PageId::new(0)).unwrap();
        assert_eq!(page.as_slice()[3], 0x77);
    }

    #[test]
    fn test_two_files_do_not_collide() {
        let dir = tempdir().unwrap();
        let mut dm_a = DiskManager::create(dir.path().join("a.db")).unwrap();
        let mut dm_b = DiskManager::create(dir.path().join("b.db")).unwrap();
        dm_a.allocate_page().unwrap();
        dm_b.allocate_page().unwrap();

        let mut pool = BufferPool::new(4);
        let a = pool.register_file(dm_a);
        let b = pool.register_file(dm_b);

        let fa = pool.read_page(a, PageId::new(0)).unwrap();
        pool.page_mut(fa).as_mut_slice()[0] = 0x0A;
        pool.unpin_page(a, PageId::new(0), true).unwrap();

        let fb = pool.read_page(b, PageId::new(0)).unwrap();
        assert_eq!(pool.page(fb).as_slice()[0], 0);
        pool.unpin_page(b, PageId::new(0), false).unwrap();

        pool.flush_file(a).unwrap();
        pool.flush_file(b).unwrap();
    }

    #[test]
    fn test_unregister_file_flushes_and_returns_manager() {
        let (mut pool, file, _dir) = create_pool(4, 1);

        let frame = pool.read_page(file, PageId::new(0)).unwrap();
        pool.page_mut(frame).as_mut_slice()[5] = 0x66;
        pool.unpin_page(file, PageId::new(0), true).unwrap();

        let mut dm = pool.unregister_file(file).unwrap();
        assert_eq!(pool.resident_count(), 0);
        assert!(pool.file(file).is_none());

        let page = dm.read_page(PageId::new(0)).unwrap();
        assert_eq!(page.as_slice()[5], 0x66);
    }

    #[test]
    fn test_unregister_file_fails_while_pinned() {
        let (mut pool, file, _dir) = create_pool(4, 1);
        pool.read_page(file, PageId::new(0)).unwrap();

        assert!(matches!(
            pool.unregister_file(file),
            Err(Error::PagePinned { .. })
        ));
        // Still registered after the failed attempt.
        assert!(pool.file(file).is_some());
    }

    #[test]
    fn test_unknown_file_rejected() {
        let (mut pool, _file, _dir) = create_pool(2, 0);
        let bogus = FileId::new(999);

        assert!(matches!(
            pool.read_page(bogus, PageId::new(0)),
            Err(Error::UnknownFile(_))
        ));
        assert!(matches!(
            pool.flush_file(bogus),
            Err(Error::UnknownFile(_))
        ));
    }
}
