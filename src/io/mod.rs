//! File bridge for memstream-rs.
//!
//! Loads files into readable streams (memory mapping large inputs) and saves
//! writable stream snapshots back to disk. The streams themselves never touch
//! the filesystem.

pub mod reader;

pub use reader::{FileReader, load_stream, save_stream};
