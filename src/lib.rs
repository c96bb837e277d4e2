//! Growable byte buffer with a non-owning read iterator.
//!
//! This crate provides two types that work together:
//!
//! - [`Buffer`]: a move-only, growable byte buffer that owns a single
//!   contiguous heap allocation
//! - [`ReadIter`]: a lightweight, copyable cursor that consumes a buffer's
//!   contents sequentially without owning them
//!
//! # Buffer
//!
//! [`Buffer`] starts empty with no allocation and grows on demand. Growth is
//! exact-fit with a 1 KB floor: each reallocation sizes to exactly what is
//! needed rather than doubling, so callers that know their total size should
//! reserve it once up front with [`Buffer::with_capacity`].
//!
//! ```
//! use bytebuf::Buffer;
//!
//! let mut buf = Buffer::new();
//! buf.append(b"hello");
//! buf.append(b"world");
//!
//! assert_eq!(buf.len(), 10);
//! assert_eq!(buf.as_slice(), b"helloworld");
//! ```
//!
//! # ReadIter
//!
//! [`ReadIter`] borrows the buffer's current contents and walks them forward:
//! copy out with [`read`](ReadIter::read), discard with
//! [`skip`](ReadIter::skip), or process in place with the zero-copy
//! [`direct_read`](ReadIter::direct_read). The borrow is tied to the buffer
//! by lifetime, so a cursor can never outlive a reallocation.
//!
//! ```
//! use bytebuf::Buffer;
//!
//! let mut buf = Buffer::new();
//! buf.append(b"helloworld");
//!
//! let mut it = buf.read_iter();
//! let mut dest = [0u8; 12];
//! let n = it.read(&mut dest);
//!
//! assert_eq!(n, 10);
//! assert_eq!(&dest[..n], b"helloworld");
//! assert!(!it.has_data());
//! ```
//!
//! # Out-of-band writes
//!
//! For callers that fill the buffer through an external writer, the
//! reserve/write/commit escape hatch pairs
//! [`spare_capacity_mut`](Buffer::spare_capacity_mut) with
//! [`set_len`](Buffer::set_len):
//!
//! ```
//! use bytebuf::Buffer;
//!
//! let mut buf = Buffer::with_capacity(64);
//! let spare = buf.spare_capacity_mut();
//! spare[..4].copy_from_slice(b"data");
//! buf.set_len(4);
//!
//! assert_eq!(buf.as_slice(), b"data");
//! ```
//!
//! # Convenience Functions
//!
//! The [`bytes`] module provides pre-sized buffer constructors:
//!
//! ```
//! use bytebuf::{bytes_4kb, bytes_64kb};
//!
//! let small = bytes_4kb();
//! let large = bytes_64kb();
//! ```

mod buffer;
mod bytes;
mod error;
mod read_iter;

pub use buffer::{Buffer, MIN_BUFFER};
pub use bytes::*;
pub use error::BufferError;
pub use read_iter::ReadIter;
