//! # memstream-rs
//!
//! Seekable in-memory byte streams for document engines.
//!
//! A PDF engine written against file-like reader and writer interfaces can
//! be handed these adapters instead of files, so documents arrive and leave
//! as in-memory blobs without touching disk.
//!
//! ## Features
//!
//! - **Readable stream**: owned copy of input bytes, absolute and
//!   end-relative seeking, saturating reads
//! - **Writable stream**: append-only growable buffer with a borrow-checked
//!   snapshot
//! - **Contracts**: [`ByteReaderWithPosition`] / [`ByteWriterWithPosition`]
//!   plus `std::io::{Read, BufRead, Seek, Write}`
//! - **CLI**: `info`, `peek`, `tail` and `copy` commands for inspecting files
//!   through the streams
//!
//! ## Example
//!
//! ```
//! use memstream_rs::{ReadableMemoryStream, WritableMemoryStream};
//!
//! let mut writer = WritableMemoryStream::new();
//! writer.write(b"%PDF-1.7\n");
//!
//! let mut reader = ReadableMemoryStream::new(writer.buffer());
//! let mut header = [0u8; 5];
//! assert_eq!(reader.read(&mut header), 5);
//! assert_eq!(&header, b"%PDF-");
//! assert!(reader.not_ended());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod error;
pub mod io;
pub mod stream;

// Re-export commonly used types at crate root
pub use error::{Error, Result, StreamError};

// Re-export stream types
pub use stream::{
    ByteReaderWithPosition, ByteWriterWithPosition, DEFAULT_BLOCK_SIZE, PipeStats,
    ReadableMemoryStream, WritableMemoryStream, pipe,
};

// Re-export I/O helpers
pub use io::{FileReader, load_stream, save_stream};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
