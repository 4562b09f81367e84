//! Record identifier type.

use std::fmt;

use crate::common::PageId;

/// Identifies a tuple in a heap file: the page holding it plus its slot
/// within that page.
///
/// Leaf nodes store one `RecordId` per key. The on-page encoding is 6
/// bytes: page number (little-endian u32) followed by slot (u16).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    /// Page of the heap file containing the record.
    pub page_no: u32,
    /// Slot of the record within that page.
    pub slot: u16,
}

impl RecordId {
    /// Encoded size in bytes.
    pub const SIZE: usize = 6;

    /// Create a new RecordId.
    #[inline]
    pub fn new(page_no: u32, slot: u16) -> Self {
        RecordId { page_no, slot }
    }

    /// Write the 6-byte encoding at the start of `buf`.
    ///
    /// # Panics
    /// Panics if `buf.len() < RecordId::SIZE`.
    pub fn write_to(&self, buf: &mut [u8]) {
        buf[0..4].copy_from_slice(&self.page_no.to_le_bytes());
        buf[4..6].copy_from_slice(&self.slot.to_le_bytes());
    }

    /// Read a RecordId from the start of `buf`.
    ///
    /// # Panics
    /// Panics if `buf.len() < RecordId::SIZE`.
    pub fn read_from(buf: &[u8]) -> Self {
        let page_no = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let slot = u16::from_le_bytes([buf[4], buf[5]]);
        RecordId { page_no, slot }
    }

    /// The page this record lives on.
    #[inline]
    pub fn page(&self) -> PageId {
        PageId::new(self.page_no)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rid({}, {})", self.page_no, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_roundtrip() {
        let rid = RecordId::new(9000, 17);
        let mut buf = [0u8; RecordId::SIZE];
        rid.write_to(&mut buf);
        assert_eq!(RecordId::read_from(&buf), rid);
    }

    #[test]
    fn test_record_id_byte_layout() {
        let rid = RecordId::new(0x04030201, 0x0605);
        let mut buf = [0u8; RecordId::SIZE];
        rid.write_to(&mut buf);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(format!("{}", RecordId::new(3, 4)), "Rid(3, 4)");
    }
}
