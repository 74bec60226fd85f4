//! Error types for memstream-rs operations.
//!
//! The stream contract methods never fail: short reads are reported through
//! return values and out-of-range positions are accepted. The types here
//! cover the checked stream helpers, the file bridge and the CLI.

use thiserror::Error;

/// Result type alias for memstream operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Stream positioning errors from checked helpers.
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised by the checked (non-contract) stream operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Offset from the end points before the first byte.
    #[error("offset {offset} from end exceeds stream length {len}")]
    OffsetBeyondStart {
        /// Requested offset from the end.
        offset: u64,
        /// Stream length in bytes.
        len: u64,
    },

    /// A relative seek resolved to a position before byte 0.
    #[error("cannot seek to negative position {position}")]
    NegativePosition {
        /// The resolved position.
        position: i128,
    },

    /// Position arithmetic does not fit in a `u64`.
    #[error("stream position overflow")]
    PositionOverflow,

    /// Block size must be non-zero.
    #[error("invalid block size: {size}")]
    InvalidBlockSize {
        /// The rejected block size.
        size: usize,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}

impl From<StreamError> for std::io::Error {
    fn from(err: StreamError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = Error::Config {
            message: "bad block size".to_string(),
        };
        assert_eq!(err.to_string(), "configuration error: bad block size");
    }

    #[test]
    fn test_stream_error_display() {
        let err = StreamError::OffsetBeyondStart { offset: 10, len: 4 };
        assert_eq!(
            err.to_string(),
            "offset 10 from end exceeds stream length 4"
        );

        let err = StreamError::NegativePosition { position: -3 };
        assert_eq!(err.to_string(), "cannot seek to negative position -3");

        let err = StreamError::InvalidBlockSize { size: 0 };
        assert_eq!(err.to_string(), "invalid block size: 0");

        assert_eq!(
            StreamError::PositionOverflow.to_string(),
            "stream position overflow"
        );
    }

    #[test]
    fn test_io_error_variants() {
        let err = IoError::FileNotFound {
            path: "/tmp/in.pdf".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/in.pdf");

        let err = IoError::ReadFailed {
            path: "/tmp/test".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("/tmp/test"));
        assert!(err.to_string().contains("permission denied"));

        let err = IoError::WriteFailed {
            path: "/tmp/out".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));

        let err = IoError::MmapFailed {
            path: "/tmp/big".to_string(),
            reason: "out of memory".to_string(),
        };
        assert!(err.to_string().contains("memory mapping"));

        let err = IoError::DirectoryFailed {
            path: "/tmp/dir".to_string(),
            reason: "exists".to_string(),
        };
        assert!(err.to_string().contains("directory"));
    }

    #[test]
    fn test_command_error_variants() {
        let err = CommandError::InvalidArgument("--length".to_string());
        assert!(err.to_string().contains("invalid argument"));

        let err = CommandError::ExecutionFailed("short write".to_string());
        assert!(err.to_string().contains("execution failed"));

        let err = CommandError::OutputFormat("json error".to_string());
        assert!(err.to_string().contains("output format"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(IoError::Generic(_))));
    }

    #[test]
    fn test_error_from_stream() {
        let err: Error = StreamError::PositionOverflow.into();
        assert!(matches!(err, Error::Stream(StreamError::PositionOverflow)));
    }

    #[test]
    fn test_stream_error_into_io_error() {
        let err: std::io::Error = StreamError::NegativePosition { position: -1 }.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_from_serde_json_error_to_command_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: CommandError = json_err.into();
        assert!(matches!(err, CommandError::OutputFormat(_)));
    }
}
