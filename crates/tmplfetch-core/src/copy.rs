//! Bounded copy with a reusable buffer.
//!
//! Archive entries declare their uncompressed size up front. The writer copies
//! exactly that many bytes: it never reads past the declared size and treats a
//! short source as an error.

use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Buffer size for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Heap buffer reused across every entry of one expansion run.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies exactly `size` bytes from `reader` to `writer`.
///
/// # Errors
///
/// Returns `UnexpectedEof` if the reader ends before `size` bytes, or any
/// read/write error from the underlying streams.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use tmplfetch_core::copy::{CopyBuffer, copy_exact};
///
/// let mut buffer = CopyBuffer::new();
/// let mut input = Cursor::new(b"hello world".to_vec());
/// let mut output = Vec::new();
///
/// let copied = copy_exact(&mut input, &mut output, 5, &mut buffer).unwrap();
/// assert_eq!(copied, 5);
/// assert_eq!(output, b"hello");
/// ```
pub fn copy_exact<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    size: u64,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    while total < size {
        let remaining = size - total;
        let chunk = usize::try_from(remaining).map_or(buffer.buf.len(), |r| r.min(buffer.buf.len()));

        let bytes_read = match reader.read(&mut buffer.buf[..chunk]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("short read: expected {size} bytes, got {total}"),
                ));
            }
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        total += bytes_read as u64;
    }

    Ok(total)
}
