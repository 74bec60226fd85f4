//! Readable in-memory stream.
//!
//! [`ReadableMemoryStream`] owns a copy of the bytes it was built from and
//! presents them as a positional, seekable input.

use crate::error::StreamError;
use crate::stream::traits::ByteReaderWithPosition;
use std::io::{self, BufRead, Read, Seek, SeekFrom};

/// A fixed block of bytes read through an absolute position.
///
/// Reads saturate at the end of the data rather than failing, and the
/// position may be moved past the end, in which case every read returns 0
/// until the position is moved back.
///
/// # Examples
///
/// ```
/// use memstream_rs::stream::ReadableMemoryStream;
///
/// let mut stream = ReadableMemoryStream::new(b"ABCDE");
/// let mut dest = [0u8; 3];
///
/// assert_eq!(stream.read(&mut dest), 3);
/// assert_eq!(&dest, b"ABC");
/// assert_eq!(stream.current_position(), 3);
///
/// stream.set_position_from_end(2);
/// assert_eq!(stream.current_position(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadableMemoryStream {
    /// Owned copy of the source bytes.
    buffer: Vec<u8>,
    /// Absolute offset of the next byte to read.
    position: u64,
}

impl ReadableMemoryStream {
    /// Creates a stream over a copy of `source`.
    ///
    /// The stream never refers back to `source` after construction.
    #[must_use]
    pub fn new(source: &[u8]) -> Self {
        Self::from_vec(source.to_vec())
    }

    /// Creates a stream that takes ownership of `buffer` without copying.
    #[must_use]
    pub const fn from_vec(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Copies up to `buf.len()` bytes from the current position.
    ///
    /// Returns the number of bytes copied and advances the position by the
    /// same amount. Returns 0 without moving when the position is at or
    /// past the end.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let available = self.remaining_slice();
        let count = available.len().min(buf.len());
        buf[..count].copy_from_slice(&available[..count]);
        self.position = self.position.saturating_add(count as u64);
        count
    }

    /// Sets the absolute position, including past the end.
    pub const fn set_position(&mut self, offset_from_start: u64) {
        self.position = offset_from_start;
    }

    /// Sets the position to `len - offset_from_end`.
    ///
    /// An offset larger than the stream clamps the position to 0. Use
    /// [`try_set_position_from_end`](Self::try_set_position_from_end) to
    /// detect that case instead.
    pub fn set_position_from_end(&mut self, offset_from_end: u64) {
        self.position = self.len().saturating_sub(offset_from_end);
    }

    /// Sets the position to `len - offset_from_end`, rejecting offsets that
    /// point before the first byte.
    ///
    /// The position is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OffsetBeyondStart`] when `offset_from_end`
    /// exceeds the stream length.
    pub fn try_set_position_from_end(
        &mut self,
        offset_from_end: u64,
    ) -> Result<u64, StreamError> {
        let len = self.len();
        match len.checked_sub(offset_from_end) {
            Some(position) => {
                self.position = position;
                Ok(position)
            }
            None => Err(StreamError::OffsetBeyondStart {
                offset: offset_from_end,
                len,
            }),
        }
    }

    /// Returns the absolute position.
    #[must_use]
    pub const fn current_position(&self) -> u64 {
        self.position
    }

    /// Advances the position by `size` bytes without bounds checking.
    pub const fn skip(&mut self, size: u64) {
        self.position = self.position.saturating_add(size);
    }

    /// Rewinds to the first byte.
    pub const fn reset(&mut self) {
        self.position = 0;
    }

    /// Returns `true` while the position is before the end of the data.
    #[must_use]
    pub fn not_ended(&self) -> bool {
        self.position < self.len()
    }

    /// Returns the stream length in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.buffer.len() as u64
    }

    /// Returns `true` if the stream holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the number of bytes left before the end, or 0 past the end.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.len().saturating_sub(self.position)
    }

    /// Returns the whole underlying buffer regardless of position.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the stream and returns its bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    fn remaining_slice(&self) -> &[u8] {
        let start = usize::try_from(self.position)
            .map_or(self.buffer.len(), |p| p.min(self.buffer.len()));
        &self.buffer[start..]
    }
}

impl From<Vec<u8>> for ReadableMemoryStream {
    fn from(buffer: Vec<u8>) -> Self {
        Self::from_vec(buffer)
    }
}

impl From<&[u8]> for ReadableMemoryStream {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}

impl ByteReaderWithPosition for ReadableMemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        Self::read(self, buf)
    }

    fn set_position(&mut self, offset_from_start: u64) {
        Self::set_position(self, offset_from_start);
    }

    fn set_position_from_end(&mut self, offset_from_end: u64) {
        Self::set_position_from_end(self, offset_from_end);
    }

    fn current_position(&self) -> u64 {
        Self::current_position(self)
    }

    fn skip(&mut self, size: u64) {
        Self::skip(self, size);
    }

    fn not_ended(&self) -> bool {
        Self::not_ended(self)
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}

impl Read for ReadableMemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(Self::read(self, buf))
    }
}

impl BufRead for ReadableMemoryStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.remaining_slice())
    }

    fn consume(&mut self, amt: usize) {
        self.skip(amt as u64);
    }
}

impl Seek for ReadableMemoryStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(offset) => {
                self.position = offset;
                return Ok(offset);
            }
            SeekFrom::End(offset) => (self.len(), offset),
            SeekFrom::Current(offset) => (self.position, offset),
        };

        let target = i128::from(base) + i128::from(offset);
        if target < 0 {
            return Err(StreamError::NegativePosition { position: target }.into());
        }
        self.position = u64::try_from(target).map_err(|_| StreamError::PositionOverflow)?;
        Ok(self.position)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position)
    }
}
