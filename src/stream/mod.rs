//! In-memory positional byte streams.
//!
//! Two independent adapters let a document engine read from and write to
//! memory exactly as it would a file:
//!
//! - [`ReadableMemoryStream`]: an owned copy of input bytes with an absolute
//!   position, seeking and saturating reads
//! - [`WritableMemoryStream`]: an append-only growable buffer whose position
//!   is its length
//!
//! Both implement the engine-facing contracts in [`traits`] as well as the
//! matching `std::io` traits.

pub mod pipe;
pub mod reader;
pub mod traits;
pub mod writer;

pub use pipe::{DEFAULT_BLOCK_SIZE, PipeStats, pipe};
pub use reader::ReadableMemoryStream;
pub use traits::{ByteReaderWithPosition, ByteWriterWithPosition};
pub use writer::WritableMemoryStream;
