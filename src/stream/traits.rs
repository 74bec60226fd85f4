//! Positional byte stream contracts.
//!
//! A document engine drives its input and output through these two traits
//! without knowing whether the bytes live in a file or in memory.

/// A byte source addressed by an absolute offset.
///
/// None of these methods fail. A read past the end returns fewer bytes (or
/// zero), and positions beyond the end are accepted and observed as
/// exhaustion by the next read. Callers loop on [`not_ended`] and the
/// returned counts.
///
/// # Examples
///
/// ```
/// use memstream_rs::stream::{ByteReaderWithPosition, ReadableMemoryStream};
///
/// fn sum_bytes<R: ByteReaderWithPosition>(reader: &mut R) -> u64 {
///     let mut total = 0u64;
///     let mut block = [0u8; 4];
///     while reader.not_ended() {
///         let n = reader.read(&mut block);
///         total += block[..n].iter().map(|&b| u64::from(b)).sum::<u64>();
///     }
///     total
/// }
///
/// let mut stream = ReadableMemoryStream::new(&[1, 2, 3, 4, 5]);
/// assert_eq!(sum_bytes(&mut stream), 15);
/// ```
///
/// [`not_ended`]: ByteReaderWithPosition::not_ended
pub trait ByteReaderWithPosition {
    /// Copies up to `buf.len()` bytes into `buf` and advances the position
    /// by the number of bytes copied, which is returned.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Sets the absolute position. Values beyond the end are kept as-is.
    fn set_position(&mut self, offset_from_start: u64);

    /// Sets the position relative to the end of the data.
    fn set_position_from_end(&mut self, offset_from_end: u64);

    /// Returns the absolute position.
    fn current_position(&self) -> u64;

    /// Moves the position forward by `size` bytes without reading.
    fn skip(&mut self, size: u64);

    /// Returns `true` while the position is before the end of the data.
    fn not_ended(&self) -> bool;

    /// Rewinds to the first byte.
    fn reset(&mut self) {
        self.set_position(0);
    }
}

/// An append-only byte sink whose position is the number of bytes written.
pub trait ByteWriterWithPosition {
    /// Appends `buf` and returns the number of bytes written.
    fn write(&mut self, buf: &[u8]) -> u64;

    /// Returns the total number of bytes written so far.
    fn current_position(&self) -> u64;
}

impl<R: ByteReaderWithPosition + ?Sized> ByteReaderWithPosition for &mut R {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }

    fn set_position(&mut self, offset_from_start: u64) {
        (**self).set_position(offset_from_start);
    }

    fn set_position_from_end(&mut self, offset_from_end: u64) {
        (**self).set_position_from_end(offset_from_end);
    }

    fn current_position(&self) -> u64 {
        (**self).current_position()
    }

    fn skip(&mut self, size: u64) {
        (**self).skip(size);
    }

    fn not_ended(&self) -> bool {
        (**self).not_ended()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

impl<W: ByteWriterWithPosition + ?Sized> ByteWriterWithPosition for &mut W {
    fn write(&mut self, buf: &[u8]) -> u64 {
        (**self).write(buf)
    }

    fn current_position(&self) -> u64 {
        (**self).current_position()
    }
}
