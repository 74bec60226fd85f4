//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Bytes per hex dump row.
const HEX_ROW: usize = 16;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Size report for a loaded stream.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    /// Input path.
    pub path: String,
    /// Stream length in bytes.
    pub size: u64,
    /// Block size used for the layout.
    pub block_size: usize,
    /// Number of blocks needed to read the stream.
    pub blocks: u64,
}

/// Bytes read from a stream at a given position.
#[derive(Debug, Clone, Serialize)]
pub struct ReadReport {
    /// Position the read started at.
    pub offset: u64,
    /// Bytes requested.
    pub requested: u64,
    /// Bytes actually read.
    pub read: usize,
    /// Position after the read.
    pub position: u64,
    /// Bytes read, lowercase hex.
    pub hex: String,
    /// Raw bytes (not serialized; the hex field carries them).
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Result of copying a file through a stream pair.
#[derive(Debug, Clone, Serialize)]
pub struct CopyReport {
    /// Input path.
    pub input: String,
    /// Output path.
    pub output: String,
    /// Bytes copied.
    pub bytes: u64,
    /// Blocks read.
    pub blocks: u64,
    /// Block size used.
    pub block_size: usize,
}

/// Formats a stream size report.
#[must_use]
pub fn format_info(report: &InfoReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Stream: {}", report.path);
            let _ = writeln!(
                output,
                "  Size:    {} ({} bytes)",
                format_size(report.size),
                report.size
            );
            let _ = writeln!(output, "  Blocks:  {} x {} bytes", report.blocks, report.block_size);
            output
        }
        OutputFormat::Json => format_json(report),
    }
}

/// Formats bytes read from a stream.
#[must_use]
pub fn format_read(report: &ReadReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(
                output,
                "Offset {} ({} of {} bytes read, position now {}):",
                report.offset, report.read, report.requested, report.position
            );
            output.push_str(&hex_dump(&report.bytes, report.offset));
            output
        }
        OutputFormat::Json => format_json(report),
    }
}

/// Formats a copy result.
#[must_use]
pub fn format_copy(report: &CopyReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            format!(
                "Copied {} bytes in {} blocks of {} bytes: {} -> {}\n",
                report.bytes, report.blocks, report.block_size, report.input, report.output
            )
        }
        OutputFormat::Json => format_json(report),
    }
}

/// Formats an error for output.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Encodes bytes as lowercase hex without separators.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(hex, "{b:02x}");
    }
    hex
}

/// Renders a classic offset / hex / ASCII dump.
fn hex_dump(bytes: &[u8], base: u64) -> String {
    if bytes.is_empty() {
        return "  (no bytes)\n".to_string();
    }

    let mut output = String::new();
    let mut row_offset = base;
    for row in bytes.chunks(HEX_ROW) {
        let _ = write!(output, "{row_offset:08x}  ");
        for i in 0..HEX_ROW {
            match row.get(i) {
                Some(b) => {
                    let _ = write!(output, "{b:02x} ");
                }
                None => output.push_str("   "),
            }
        }
        output.push(' ');
        output.extend(row.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                char::from(b)
            } else {
                '.'
            }
        }));
        output.push('\n');
        row_offset = row_offset.saturating_add(row.len() as u64);
    }
    output
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a byte size as human-readable.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
