//! Block-wise transfer between positional streams.

use crate::error::{Result, StreamError};
use crate::stream::traits::{ByteReaderWithPosition, ByteWriterWithPosition};
use serde::Serialize;
use tracing::{debug, trace};

/// Default transfer block size (8 KiB).
pub const DEFAULT_BLOCK_SIZE: usize = 8 * 1024;

/// Totals reported by [`pipe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipeStats {
    /// Bytes moved from reader to writer.
    pub bytes: u64,
    /// Number of non-empty reads performed.
    pub blocks: u64,
}

/// Copies everything from the reader's current position into the writer.
///
/// Reads in blocks of `block_size` bytes until [`not_ended`] turns false or a
/// read comes back empty. The reader ends up at its end; the writer has the
/// bytes appended.
///
/// # Errors
///
/// Returns [`StreamError::InvalidBlockSize`] if `block_size` is zero.
///
/// # Examples
///
/// ```
/// use memstream_rs::stream::{ReadableMemoryStream, WritableMemoryStream, pipe};
///
/// let mut reader = ReadableMemoryStream::new(b"0123456789");
/// reader.skip(2);
/// let mut writer = WritableMemoryStream::new();
///
/// let stats = pipe(&mut reader, &mut writer, 3).unwrap();
/// assert_eq!(stats.bytes, 8);
/// assert_eq!(stats.blocks, 3);
/// assert_eq!(writer.buffer(), b"23456789");
/// ```
///
/// [`not_ended`]: ByteReaderWithPosition::not_ended
pub fn pipe<R, W>(reader: &mut R, writer: &mut W, block_size: usize) -> Result<PipeStats>
where
    R: ByteReaderWithPosition + ?Sized,
    W: ByteWriterWithPosition + ?Sized,
{
    if block_size == 0 {
        return Err(StreamError::InvalidBlockSize { size: block_size }.into());
    }

    let start = reader.current_position();
    let mut block = vec![0u8; block_size];
    let mut stats = PipeStats::default();

    while reader.not_ended() {
        let read = reader.read(&mut block);
        if read == 0 {
            break;
        }
        stats.bytes += writer.write(&block[..read]);
        stats.blocks += 1;
        trace!(read, position = reader.current_position(), "block copied");
    }

    debug!(
        start,
        bytes = stats.bytes,
        blocks = stats.blocks,
        block_size,
        "pipe complete"
    );
    Ok(stats)
}
