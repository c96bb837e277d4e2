//! Convenience functions for creating pre-sized buffers.

use crate::Buffer;

/// Creates a buffer with 1KB reserved.
pub fn bytes_1kb() -> Buffer {
    Buffer::with_capacity(1024)
}

/// Creates a buffer with 4KB reserved.
pub fn bytes_4kb() -> Buffer {
    Buffer::with_capacity(4096)
}

/// Creates a buffer with 16KB reserved.
pub fn bytes_16kb() -> Buffer {
    Buffer::with_capacity(16384)
}

/// Creates a buffer with 64KB reserved.
pub fn bytes_64kb() -> Buffer {
    Buffer::with_capacity(65536)
}

/// Creates a buffer with the default 1KB reservation.
pub fn bytes() -> Buffer {
    bytes_1kb()
}
