//! Non-owning read cursor over a buffer's contents.

use crate::buffer::Buffer;

/// A forward read cursor over a [`Buffer`]'s contents.
///
/// `ReadIter` borrows the buffer's current bytes and tracks a consumption
/// position plus a running offset. It never mutates or owns the bytes it
/// ranges over; its lifetime ties it to the source buffer, so the borrow
/// checker rejects any use across a mutating buffer call.
///
/// # Semantics
///
/// - **Consumption**: one-way. Every consuming operation moves the cursor
///   toward the fixed limit; there is no reset or rewind.
/// - **Clamping**: [`read`](ReadIter::read) and [`skip`](ReadIter::skip)
///   silently truncate to the bytes actually remaining and return the count.
///   Callers that need to know whether a request was fully satisfied compare
///   the returned count to the requested one.
/// - **Copying**: a `ReadIter` is a cheap two-word view and is `Copy`; a
///   copy consumes independently of the original.
///
/// # Example
///
/// ```
/// use bytebuf::{Buffer, ReadIter};
///
/// let mut buf = Buffer::new();
/// buf.append(b"helloworld");
///
/// let mut it = buf.read_iter();
/// assert_eq!(it.direct_read(5), b"hello");
/// // Fully qualified: `Iterator::skip` would otherwise shadow this method.
/// assert_eq!(ReadIter::skip(&mut it, 3), 3);
/// assert_eq!(it.offset(), 8);
///
/// let mut rest = [0u8; 8];
/// assert_eq!(it.read(&mut rest), 2);
/// assert_eq!(&rest[..2], b"ld");
/// assert!(!it.has_data());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadIter<'a> {
    remaining: &'a [u8],
    offset: usize,
}

impl<'a> ReadIter<'a> {
    /// Binds a cursor to the buffer's current contents, offset 0.
    pub fn new(buf: &'a Buffer) -> Self {
        ReadIter {
            remaining: buf.as_slice(),
            offset: 0,
        }
    }

    /// Returns true if unread bytes remain.
    pub fn has_data(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// Returns the number of bytes reachable without indirection.
    ///
    /// The cursor ranges over one contiguous region, so this is the full
    /// remaining count. A default-constructed cursor reports 0.
    pub fn direct_available(&self) -> usize {
        self.remaining.len()
    }

    /// Zero-copy read: returns the next `len` bytes as a subslice of the
    /// source and advances the cursor past them.
    ///
    /// The returned slice borrows from the source buffer, not from the
    /// cursor, so it stays usable while the cursor moves on. Precondition:
    /// `len <= direct_available()` (debug-asserted; panics in release).
    pub fn direct_read(&mut self, len: usize) -> &'a [u8] {
        debug_assert!(len <= self.remaining.len());
        let (head, tail) = self.remaining.split_at(len);
        self.remaining = tail;
        self.offset += len;
        head
    }

    /// Returns the byte at the cursor without advancing.
    ///
    /// Precondition: `has_data()` (debug-asserted; panics in release).
    pub fn peek(&self) -> u8 {
        debug_assert!(self.has_data());
        self.remaining[0]
    }

    /// Copies up to `dest.len()` bytes into `dest` and advances past them.
    ///
    /// Clamps to the bytes remaining; returns the count actually copied,
    /// 0 once exhausted.
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        let n = dest.len().min(self.remaining.len());
        dest[..n].copy_from_slice(&self.remaining[..n]);
        self.remaining = &self.remaining[n..];
        self.offset += n;
        n
    }

    /// Discards up to `len` bytes and advances past them.
    ///
    /// Same clamping as [`read`](ReadIter::read); returns the count
    /// actually skipped.
    pub fn skip(&mut self, len: usize) -> usize {
        let n = len.min(self.remaining.len());
        self.remaining = &self.remaining[n..];
        self.offset += n;
        n
    }

    /// Returns the total bytes consumed through this cursor.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for ReadIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let (&byte, tail) = self.remaining.split_first()?;
        self.remaining = tail;
        self.offset += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl ExactSizeIterator for ReadIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(content: &[u8]) -> Buffer {
        let mut buf = Buffer::new();
        buf.append(content);
        buf
    }

    #[test]
    fn test_default_is_permanently_empty() {
        let mut it = ReadIter::default();
        assert!(!it.has_data());
        assert_eq!(it.direct_available(), 0);
        assert_eq!(it.direct_read(0), b"");
        assert_eq!(it.read(&mut [0u8; 4]), 0);
        assert_eq!(ReadIter::skip(&mut it, 4), 0);
        assert_eq!(it.offset(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_empty_buffer_cursor() {
        let buf = Buffer::new();
        let it = buf.read_iter();
        assert!(!it.has_data());
        assert_eq!(it.direct_available(), 0);
    }

    #[test]
    fn test_read_all() {
        let buf = filled(b"helloworld");
        let mut it = buf.read_iter();

        let mut dest = [0u8; 12];
        let n = it.read(&mut dest);
        assert_eq!(n, 10);
        assert_eq!(&dest[..10], b"helloworld");
        assert!(!it.has_data());

        // Exhausted: further reads return 0.
        assert_eq!(it.read(&mut dest), 0);
        assert_eq!(ReadIter::skip(&mut it, 1), 0);
        assert_eq!(it.offset(), 10);
    }

    #[test]
    fn test_read_clamps_to_remaining() {
        let buf = filled(b"abcde");
        let mut it = buf.read_iter();

        let mut head = [0u8; 3];
        assert_eq!(it.read(&mut head), 3);
        assert_eq!(&head, b"abc");

        let mut tail = [0u8; 8];
        assert_eq!(it.read(&mut tail), 2);
        assert_eq!(&tail[..2], b"de");
        assert_eq!(it.read(&mut tail), 0);
    }

    #[test]
    fn test_skip_then_read() {
        let buf = filled(b"helloworld");
        let mut it = buf.read_iter();

        assert_eq!(ReadIter::skip(&mut it, 5), 5);
        let mut dest = [0u8; 5];
        assert_eq!(it.read(&mut dest), 5);
        assert_eq!(&dest, b"world");
    }

    #[test]
    fn test_skip_clamps() {
        let buf = filled(b"abc");
        let mut it = buf.read_iter();
        assert_eq!(ReadIter::skip(&mut it, 10), 3);
        assert_eq!(it.offset(), 3);
        assert!(!it.has_data());
    }

    #[test]
    fn test_direct_read_zero_copy() {
        let buf = filled(b"helloworld");
        let mut it = buf.read_iter();

        let hello = it.direct_read(5);
        assert_eq!(hello, b"hello");
        assert_eq!(it.direct_available(), 5);

        let world = it.direct_read(5);
        assert_eq!(world, b"world");
        assert!(!it.has_data());

        // Earlier direct slices stay valid while the cursor moves.
        assert_eq!(hello, b"hello");
    }

    #[test]
    fn test_offset_monotonic_across_mixed_ops() {
        let buf = filled(b"0123456789");
        let mut it = buf.read_iter();

        assert_eq!(it.offset(), 0);
        it.direct_read(2);
        assert_eq!(it.offset(), 2);
        ReadIter::skip(&mut it, 3);
        assert_eq!(it.offset(), 5);
        it.read(&mut [0u8; 2]);
        assert_eq!(it.offset(), 7);
        it.next();
        assert_eq!(it.offset(), 8);
        ReadIter::skip(&mut it, 100);
        assert_eq!(it.offset(), 10);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let buf = filled(b"xy");
        let mut it = buf.read_iter();

        assert_eq!(it.peek(), b'x');
        assert_eq!(it.peek(), b'x');
        assert_eq!(it.offset(), 0);

        assert_eq!(it.next(), Some(b'x'));
        assert_eq!(it.peek(), b'y');
    }

    #[test]
    fn test_iterator_yields_exactly_n_bytes() {
        let buf = filled(b"abc");
        let mut it = buf.read_iter();

        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(b'a'));
        assert_eq!(it.next(), Some(b'b'));
        assert_eq!(it.next(), Some(b'c'));
        assert_eq!(it.next(), None);
        assert_eq!(it.offset(), 3);
    }

    #[test]
    fn test_collect_via_iterator() {
        let buf = filled(b"stream");
        let collected: Vec<u8> = buf.read_iter().collect();
        assert_eq!(collected, b"stream");
    }

    #[test]
    fn test_copy_consumes_independently() {
        let buf = filled(b"abcd");
        let mut a = buf.read_iter();
        let mut b = a;

        assert_eq!(ReadIter::skip(&mut a, 4), 4);
        assert!(!a.has_data());

        // The copy still sees everything.
        assert_eq!(b.direct_available(), 4);
        assert_eq!(b.next(), Some(b'a'));
    }
}
