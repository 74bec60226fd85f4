//! File loading and saving for memory streams.
//!
//! Provides efficient file reading for both small and large files, with
//! automatic detection of when to use memory mapping.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use crate::stream::{ReadableMemoryStream, WritableMemoryStream};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum file size to load into a stream (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// File reader with support for memory mapping.
///
/// Automatically chooses the best reading strategy based on file size:
/// - Small files (< 1MB): Read directly into memory
/// - Large files (>= 1MB): Use memory mapping, then copy into the stream
///
/// # Examples
///
/// ```no_run
/// use memstream_rs::io::FileReader;
///
/// let reader = FileReader::open("document.pdf").unwrap();
/// let stream = reader.into_stream().unwrap();
/// assert_eq!(stream.current_position(), 0);
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or is
    /// larger than the 1GB limit.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = metadata.len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the whole file into a readable stream positioned at 0.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or memory mapping fails.
    pub fn into_stream(self) -> Result<ReadableMemoryStream> {
        let bytes = if self.size >= MMAP_THRESHOLD {
            self.read_mmap_bytes()?
        } else {
            self.read_direct_bytes()?
        };
        debug!(path = %self.path, size = bytes.len(), "loaded stream");
        Ok(ReadableMemoryStream::from_vec(bytes))
    }

    /// Reads bytes using memory mapping.
    fn read_mmap_bytes(&self) -> Result<Vec<u8>> {
        // Safety: We're only reading from the file, which is safe
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        Ok(mmap.to_vec())
    }

    /// Reads bytes directly into memory.
    #[allow(clippy::cast_possible_truncation)]
    fn read_direct_bytes(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

/// Loads a file into a readable stream.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
///
/// # Examples
///
/// ```no_run
/// use memstream_rs::io::load_stream;
///
/// let mut stream = load_stream("document.pdf").unwrap();
/// stream.set_position_from_end(32);
/// ```
pub fn load_stream<P: AsRef<Path>>(path: P) -> Result<ReadableMemoryStream> {
    FileReader::open(path)?.into_stream()
}

/// Writes a stream snapshot to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn save_stream<P: AsRef<Path>>(path: P, stream: &WritableMemoryStream) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, stream.buffer()).map_err(|e| IoError::WriteFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    debug!(path = %path_str, size = stream.len(), "saved stream");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_load_small_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("small.pdf");
        std::fs::write(&file_path, b"%PDF-1.4\n%%EOF").unwrap();

        let mut stream = load_stream(&file_path).unwrap();
        assert_eq!(stream.len(), 14);

        let mut header = [0u8; 8];
        assert_eq!(stream.read(&mut header), 8);
        assert_eq!(&header, b"%PDF-1.4");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_stream("/nonexistent/path/file.pdf");
        assert!(matches!(
            result,
            Err(Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_file_reader_size_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.bin");
        std::fs::write(&file_path, b"Hello").unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        assert_eq!(reader.size(), 5);
        assert!(reader.path().contains("test.bin"));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.bin");
        std::fs::write(&file_path, b"").unwrap();

        let stream = load_stream(&file_path).unwrap();
        assert!(stream.is_empty());
        assert!(!stream.not_ended());
    }

    #[test]
    fn test_load_large_file_mmap_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.bin");

        let content: Vec<u8> = (0..=255u8).cycle().take(1024 * 1024 + 100).collect();
        std::fs::write(&file_path, &content).unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        assert!(reader.size() >= MMAP_THRESHOLD);

        let mut stream = reader.into_stream().unwrap();
        assert_eq!(stream.len(), content.len() as u64);

        stream.set_position_from_end(1);
        let mut last = [0u8; 1];
        assert_eq!(stream.read(&mut last), 1);
        assert_eq!(last[0], content[content.len() - 1]);
    }

    #[test]
    fn test_save_stream() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.pdf");

        let mut stream = WritableMemoryStream::new();
        stream.write(b"%PDF-1.7");
        save_stream(&file_path, &stream).unwrap();

        assert_eq!(std::fs::read(&file_path).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_save_stream_nested_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a/b/c/deep.bin");

        let mut stream = WritableMemoryStream::new();
        stream.write(&[1, 2, 3]);
        save_stream(&file_path, &stream).unwrap();

        assert_eq!(std::fs::read(&file_path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("round.bin");

        let mut writer = WritableMemoryStream::new();
        writer.write(b"binary\x00data");
        save_stream(&file_path, &writer).unwrap();

        let reader = load_stream(&file_path).unwrap();
        assert_eq!(reader.as_slice(), writer.buffer());
    }
}
