//! Frame descriptor - per-slot metadata in the buffer pool.
//!
//! The pool keeps one [`FrameDescriptor`] per frame, tracking which page
//! occupies the slot and the state the clock sweep needs: validity,
//! reference bit, pin count, and dirty flag.

use crate::common::{FileId, PageId};

/// Metadata for one frame of the buffer pool.
///
/// The page content itself lives in the pool's frame arena; a descriptor
/// only describes it. Content is meaningful iff `valid` is set, `dirty`
/// implies the content differs from the on-disk copy, and a frame may be
/// chosen for eviction only when `pin_count == 0`.
///
/// The engine is single-threaded, so plain fields suffice; the pool
/// mediates every mutation through `&mut self`.
#[derive(Debug)]
pub struct FrameDescriptor {
    /// Whether this frame holds a live page.
    valid: bool,
    /// Second-chance bit: set on access, cleared by the clock sweep.
    refbit: bool,
    /// Number of active pins. Never negative by construction.
    pin_count: u32,
    /// Whether the content has been modified since it was loaded.
    dirty: bool,
    /// Owning file of the cached page, if any.
    file: Option<FileId>,
    /// Page number of the cached page within its file.
    page_no: PageId,
}

impl FrameDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self {
            valid: false,
            refbit: false,
            pin_count: 0,
            dirty: false,
            file: None,
            page_no: PageId::NONE,
        }
    }

    /// Set the descriptor up for a freshly loaded page.
    ///
    /// Leaves the frame valid, pinned once, referenced, and clean.
    pub fn set(&mut self, file: FileId, page_no: PageId) {
        self.valid = true;
        self.refbit = true;
        self.pin_count = 1;
        self.dirty = false;
        self.file = Some(file);
        self.page_no = page_no;
    }

    /// Reset the descriptor to the empty state.
    pub fn clear(&mut self) {
        self.valid = false;
        self.refbit = false;
        self.pin_count = 0;
        self.dirty = false;
        self.file = None;
        self.page_no = PageId::NONE;
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn refbit(&self) -> bool {
        self.refbit
    }

    #[inline]
    pub fn set_refbit(&mut self) {
        self.refbit = true;
    }

    #[inline]
    pub fn clear_refbit(&mut self) {
        self.refbit = false;
    }

    #[inline]
    pub fn pin_count(&self) -> u32 {
        self.pin_count
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pin_count > 0
    }

    /// Increment the pin count.
    #[inline]
    pub fn pin(&mut self) {
        self.pin_count += 1;
    }

    /// Decrement the pin count.
    ///
    /// # Panics
    /// Panics if the pin count is already 0. The pool checks before
    /// calling and reports `PageNotPinned` instead.
    #[inline]
    pub fn unpin(&mut self) {
        assert!(self.pin_count > 0, "pin count underflow");
        self.pin_count -= 1;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Owning file, if the frame is occupied.
    #[inline]
    pub fn file(&self) -> Option<FileId> {
        self.file
    }

    /// Page number of the cached page.
    #[inline]
    pub fn page_no(&self) -> PageId {
        self.page_no
    }
}

impl Default for FrameDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_new() {
        let desc = FrameDescriptor::new();
        assert!(!desc.is_valid());
        assert!(!desc.is_pinned());
        assert!(!desc.is_dirty());
        assert!(!desc.refbit());
        assert_eq!(desc.file(), None);
    }

    #[test]
    fn test_descriptor_set() {
        let mut desc = FrameDescriptor::new();
        desc.set(FileId::new(1), PageId::new(42));

        assert!(desc.is_valid());
        assert!(desc.refbit());
        assert_eq!(desc.pin_count(), 1);
        assert!(!desc.is_dirty());
        assert_eq!(desc.file(), Some(FileId::new(1)));
        assert_eq!(desc.page_no(), PageId::new(42));
    }

    #[test]
    fn test_descriptor_pin_unpin() {
        let mut desc = FrameDescriptor::new();
        desc.set(FileId::new(1), PageId::new(7));

        desc.pin();
        assert_eq!(desc.pin_count(), 2);

        desc.unpin();
        desc.unpin();
        assert!(!desc.is_pinned());
    }

    #[test]
    #[should_panic(expected = "pin count underflow")]
    fn test_descriptor_unpin_underflow() {
        let mut desc = FrameDescriptor::new();
        desc.unpin();
    }

    #[test]
    fn test_descriptor_dirty_sticky_until_clear() {
        let mut desc = FrameDescriptor::new();
        desc.set(FileId::new(1), PageId::new(7));

        desc.mark_dirty();
        desc.unpin();
        // Unpinning alone never clears the dirty flag.
        assert!(desc.is_dirty());

        desc.clear_dirty();
        assert!(!desc.is_dirty());
    }

    #[test]
    fn test_descriptor_clear() {
        let mut desc = FrameDescriptor::new();
        desc.set(FileId::new(2), PageId::new(9));
        desc.mark_dirty();

        desc.clear();

        assert!(!desc.is_valid());
        assert!(!desc.is_dirty());
        assert_eq!(desc.pin_count(), 0);
        assert_eq!(desc.file(), None);
        assert_eq!(desc.page_no(), PageId::NONE);
    }
}
