//! Configuration constants for quarrydb.

/// Size of a page in bytes (4KB).
///
/// Matches the OS page size on most systems and the common database
/// page size. Every unit of I/O between disk and the buffer pool is
/// exactly one page.
pub const PAGE_SIZE: usize = 4096;

/// Default number of frames in a buffer pool.
pub const DEFAULT_POOL_SIZE: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_power_of_two() {
        assert!(PAGE_SIZE.is_power_of_two());
        assert_eq!(PAGE_SIZE, 4096);
    }

    #[test]
    fn test_default_pool_size_nonzero() {
        assert!(DEFAULT_POOL_SIZE > 0);
    }
}
