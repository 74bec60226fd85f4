//! Writable in-memory stream.

use crate::stream::reader::ReadableMemoryStream;
use crate::stream::traits::ByteWriterWithPosition;
use std::io::{self, Write};

/// An append-only, growable byte sink.
///
/// The position is always the number of bytes written; the stream never
/// seeks or overwrites. [`buffer`](Self::buffer) lends out the bytes written
/// so far, and the borrow ends before the next write can happen.
///
/// # Examples
///
/// ```
/// use memstream_rs::stream::WritableMemoryStream;
///
/// let mut stream = WritableMemoryStream::new();
/// assert_eq!(stream.write(&[0x01, 0x02]), 2);
/// assert_eq!(stream.write(&[0x03]), 1);
///
/// assert_eq!(stream.current_position(), 3);
/// assert_eq!(stream.buffer(), &[0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WritableMemoryStream {
    buffer: Vec<u8>,
}

impl WritableMemoryStream {
    /// Creates an empty stream.
    #[must_use]
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Creates an empty stream with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Appends `buf` and returns its length.
    pub fn write(&mut self, buf: &[u8]) -> u64 {
        self.buffer.extend_from_slice(buf);
        buf.len() as u64
    }

    /// Returns the total number of bytes written.
    #[must_use]
    pub fn current_position(&self) -> u64 {
        self.buffer.len() as u64
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Copies the current snapshot into a new reader positioned at 0.
    #[must_use]
    pub fn to_reader(&self) -> ReadableMemoryStream {
        ReadableMemoryStream::new(&self.buffer)
    }

    /// Consumes the stream and returns the written bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl ByteWriterWithPosition for WritableMemoryStream {
    fn write(&mut self, buf: &[u8]) -> u64 {
        Self::write(self, buf)
    }

    fn current_position(&self) -> u64 {
        Self::current_position(self)
    }
}

impl Write for WritableMemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.buffer.extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<WritableMemoryStream> for ReadableMemoryStream {
    fn from(stream: WritableMemoryStream) -> Self {
        Self::from_vec(stream.into_inner())
    }
}
