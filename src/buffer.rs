//! Growable byte buffer implementation.

use crate::error::BufferError;
use crate::read_iter::ReadIter;

/// Minimum allocation size in bytes.
///
/// The first allocation, and every reallocation, is floored at this size to
/// avoid repeated tiny allocations.
pub const MIN_BUFFER: usize = 1024;

/// A move-only growable byte buffer.
///
/// `Buffer` owns a single contiguous heap allocation and tracks how many of
/// its bytes are valid content. It starts empty with no allocation; the first
/// append (or an up-front [`reserve`](Buffer::reserve)) allocates.
///
/// # Semantics
///
/// - **Growth**: exact-fit on demand, floored at [`MIN_BUFFER`]. A
///   reallocation sizes to exactly the requested total, never a doubling
///   multiple, and copies forward only the valid prefix. The allocation
///   never shrinks.
/// - **Ownership**: move-only. There is no `Clone`; duplicating content must
///   go through [`as_slice`](Buffer::as_slice) explicitly. Moving out (via
///   [`take`](Buffer::take) or `std::mem::take`) leaves the source empty
///   with no allocation.
/// - **Borrows**: slices returned by the accessors are invalidated by any
///   mutating call; the borrow checker enforces this.
///
/// # Example
///
/// ```
/// use bytebuf::Buffer;
///
/// let mut buf = Buffer::new();
/// buf.append(b"hello");
/// buf.append_u8(b'!');
///
/// assert_eq!(buf.len(), 6);
/// assert_eq!(buf.as_slice(), b"hello!");
/// ```
#[derive(Debug, Default)]
pub struct Buffer {
    size: usize,
    data: Option<Box<[u8]>>,
}

impl Buffer {
    /// Creates a new empty buffer with no allocation.
    pub fn new() -> Self {
        Buffer {
            size: 0,
            data: None,
        }
    }

    /// Creates a new empty buffer with at least `capacity` bytes reserved.
    ///
    /// The reservation is floored at [`MIN_BUFFER`]. Callers that know their
    /// total size should use this to avoid reallocation during appends.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Buffer::new();
        buf.reserve(capacity);
        buf
    }

    /// Returns the number of valid bytes in the buffer.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the buffer holds no valid bytes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of bytes currently allocated.
    ///
    /// Returns 0 when no allocation exists yet.
    pub fn capacity(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    /// Returns the valid region as a slice.
    pub fn as_slice(&self) -> &[u8] {
        match &self.data {
            Some(data) => &data[..self.size],
            None => &[],
        }
    }

    /// Returns the valid region as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.data {
            Some(data) => &mut data[..self.size],
            None => &mut [],
        }
    }

    /// Returns the unused tail of the allocation as a writable slice.
    ///
    /// This is the first half of the reserve/write/commit escape hatch:
    /// write into the returned slice, then commit the written length with
    /// [`set_len`](Buffer::set_len). The slice is valid only until the next
    /// mutating call.
    pub fn spare_capacity_mut(&mut self) -> &mut [u8] {
        let size = self.size;
        match &mut self.data {
            Some(data) => &mut data[size..],
            None => &mut [],
        }
    }

    /// Reserves an initial allocation of at least `min_capacity` bytes,
    /// floored at [`MIN_BUFFER`].
    ///
    /// Only valid on a buffer that holds no data and no allocation; calling
    /// it on anything else is a contract violation (debug-asserted). Use
    /// [`try_reserve`](Buffer::try_reserve) for a checked variant.
    pub fn reserve(&mut self, min_capacity: usize) {
        debug_assert_eq!(self.size, 0);
        debug_assert!(self.data.is_none());

        let cap = min_capacity.max(MIN_BUFFER);
        self.data = Some(vec![0u8; cap].into_boxed_slice());
    }

    /// Checked variant of [`reserve`](Buffer::reserve).
    ///
    /// Fails with [`BufferError::AlreadyAllocated`] if the buffer already
    /// holds data or an allocation.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), BufferError> {
        if self.size != 0 || self.data.is_some() {
            return Err(BufferError::AlreadyAllocated);
        }
        self.reserve(min_capacity);
        Ok(())
    }

    /// Grows the allocation to hold at least `needed` bytes.
    ///
    /// Exact-fit: the new capacity is `max(needed, MIN_BUFFER)`, and only
    /// the valid prefix is copied forward.
    fn ensure_capacity(&mut self, needed: usize) {
        if self.data.is_none() {
            self.reserve(needed);
        } else if needed > self.capacity() {
            let cap = needed.max(MIN_BUFFER);
            let mut grown = vec![0u8; cap].into_boxed_slice();
            if let Some(old) = &self.data {
                grown[..self.size].copy_from_slice(&old[..self.size]);
            }
            self.data = Some(grown);
        }
    }

    /// Appends bytes to the tail of the buffer, growing if needed.
    pub fn append(&mut self, data: &[u8]) {
        self.ensure_capacity(self.size + data.len());
        let start = self.size;
        if let Some(buf) = &mut self.data {
            buf[start..start + data.len()].copy_from_slice(data);
        }
        self.size += data.len();
    }

    /// Appends up to `count` bytes pulled from a read iterator.
    ///
    /// Capacity for the full `count` is reserved once up front; the copy
    /// then proceeds in bulk over the iterator's directly available runs
    /// while it still has data and the count is not exhausted. Returns the
    /// number of bytes actually appended, which is less than `count` when
    /// the iterator runs out first.
    ///
    /// # Example
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let mut src = Buffer::new();
    /// src.append(b"payload");
    ///
    /// let mut dst = Buffer::new();
    /// let mut it = src.read_iter();
    /// let n = dst.append_from(&mut it, 7);
    ///
    /// assert_eq!(n, 7);
    /// assert_eq!(dst.as_slice(), b"payload");
    /// assert!(!it.has_data());
    /// ```
    pub fn append_from(&mut self, it: &mut ReadIter<'_>, count: usize) -> usize {
        self.ensure_capacity(self.size + count);
        let mut remaining = count;
        while remaining != 0 && it.has_data() {
            let run = remaining.min(it.direct_available());
            let chunk = it.direct_read(run);
            let start = self.size;
            if let Some(buf) = &mut self.data {
                buf[start..start + chunk.len()].copy_from_slice(chunk);
            }
            self.size += chunk.len();
            remaining -= chunk.len();
        }
        count - remaining
    }

    /// Appends a single byte and returns the new size.
    pub fn append_u8(&mut self, value: u8) -> usize {
        self.ensure_capacity(self.size + 1);
        if let Some(buf) = &mut self.data {
            buf[self.size] = value;
        }
        self.size += 1;
        self.size
    }

    /// Sets the valid size directly without touching memory.
    ///
    /// This commits bytes written out-of-band through
    /// [`spare_capacity_mut`](Buffer::spare_capacity_mut). Requires an
    /// existing allocation and `new_len <= capacity()` (debug-asserted).
    /// Use [`try_set_len`](Buffer::try_set_len) for a checked variant.
    pub fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        debug_assert!(self.data.is_some());
        self.size = new_len;
    }

    /// Checked variant of [`set_len`](Buffer::set_len).
    pub fn try_set_len(&mut self, new_len: usize) -> Result<(), BufferError> {
        if self.data.is_none() {
            return Err(BufferError::Unallocated);
        }
        if new_len > self.capacity() {
            return Err(BufferError::LenExceedsCapacity {
                len: new_len,
                capacity: self.capacity(),
            });
        }
        self.size = new_len;
        Ok(())
    }

    /// Moves the contents out, leaving this buffer empty with no allocation.
    pub fn take(&mut self) -> Buffer {
        std::mem::take(self)
    }

    /// Returns a read iterator over the current contents.
    ///
    /// The iterator borrows the buffer; the borrow checker rejects any
    /// mutating call on the buffer while the iterator is alive.
    pub fn read_iter(&self) -> ReadIter<'_> {
        ReadIter::new(self)
    }
}
