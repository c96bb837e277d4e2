//! Error type for checked buffer operations.

/// Buffer contract violation.
///
/// Returned by the checked variants ([`try_reserve`], [`try_set_len`]) when
/// a call would break a buffer invariant. The unchecked counterparts treat
/// the same conditions as programmer errors and debug-assert them instead.
///
/// [`try_reserve`]: crate::Buffer::try_reserve
/// [`try_set_len`]: crate::Buffer::try_set_len
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Reservation attempted on a buffer that already holds data or an
    /// allocation.
    #[error("buffer: already allocated")]
    AlreadyAllocated,
    /// Size commit past the end of the allocation.
    #[error("buffer: length {len} exceeds capacity {capacity}")]
    LenExceedsCapacity {
        /// The rejected length.
        len: usize,
        /// The current allocation size.
        capacity: usize,
    },
    /// Size commit on a buffer with no allocation.
    #[error("buffer: not allocated")]
    Unallocated,
}
