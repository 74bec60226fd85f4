//! CLI command implementations.
//!
//! Each command loads its input into a [`ReadableMemoryStream`] and drives
//! it through the positional stream contract.

use crate::cli::output::{
    CopyReport, InfoReport, OutputFormat, ReadReport, format_copy, format_info, format_read,
    to_hex,
};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Error, Result};
use crate::io::{load_stream, save_stream};
use crate::stream::{ReadableMemoryStream, WritableMemoryStream, pipe};
use std::path::Path;
use tracing::{debug, info};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the block size is zero, the input cannot be loaded,
/// or the output cannot be written.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    if cli.block_size == 0 {
        return Err(Error::Config {
            message: "block size must be greater than zero".to_string(),
        });
    }

    debug!(command = ?cli.command, block_size = cli.block_size, "executing");

    match &cli.command {
        Commands::Info { file } => cmd_info(file, cli.block_size, format),
        Commands::Peek {
            file,
            offset,
            length,
        } => cmd_peek(file, *offset, *length, format),
        Commands::Tail { file, length } => cmd_tail(file, *length, format),
        Commands::Copy { input, output } => cmd_copy(input, output, cli.block_size, format),
    }
}

fn cmd_info(file: &Path, block_size: usize, format: OutputFormat) -> Result<String> {
    let stream = load_stream(file)?;
    let size = stream.len();

    let report = InfoReport {
        path: file.to_string_lossy().to_string(),
        size,
        block_size,
        blocks: size.div_ceil(block_size as u64),
    };
    Ok(format_info(&report, format))
}

fn cmd_peek(file: &Path, offset: u64, length: usize, format: OutputFormat) -> Result<String> {
    let mut stream = load_stream(file)?;
    stream.set_position(offset);

    let report = read_report(&mut stream, length as u64)?;
    Ok(format_read(&report, format))
}

fn cmd_tail(file: &Path, length: u64, format: OutputFormat) -> Result<String> {
    let mut stream = load_stream(file)?;
    stream.set_position_from_end(length);

    let report = read_report(&mut stream, length)?;
    Ok(format_read(&report, format))
}

fn cmd_copy(
    input: &Path,
    output: &Path,
    block_size: usize,
    format: OutputFormat,
) -> Result<String> {
    let mut reader = load_stream(input)?;
    let mut writer =
        WritableMemoryStream::with_capacity(usize::try_from(reader.len()).unwrap_or_default());

    let stats = pipe(&mut reader, &mut writer, block_size)?;
    if writer.current_position() != reader.len() {
        return Err(CommandError::ExecutionFailed(format!(
            "copied {} of {} bytes",
            writer.current_position(),
            reader.len()
        ))
        .into());
    }

    save_stream(output, &writer)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = stats.bytes,
        "copy complete"
    );

    let report = CopyReport {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        bytes: stats.bytes,
        blocks: stats.blocks,
        block_size,
    };
    Ok(format_copy(&report, format))
}

/// Reads up to `requested` bytes from the stream's current position.
///
/// The destination is sized to what the stream can still deliver, so large
/// requests near the end do not allocate.
fn read_report(stream: &mut ReadableMemoryStream, requested: u64) -> Result<ReadReport> {
    let offset = stream.current_position();
    let capacity = usize::try_from(requested.min(stream.remaining())).map_err(|_| {
        CommandError::InvalidArgument(format!("read length too large: {requested}"))
    })?;

    let mut bytes = vec![0u8; capacity];
    let read = stream.read(&mut bytes);
    bytes.truncate(read);

    Ok(ReadReport {
        offset,
        requested,
        read,
        position: stream.current_position(),
        hex: to_hex(&bytes),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_sample(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("sample.bin");
        std::fs::write(&path, [0x41u8, 0x42, 0x43, 0x44, 0x45]).unwrap();
        path
    }

    fn make_cli(command: Commands, format: &str, block_size: usize) -> Cli {
        Cli {
            block_size,
            verbose: false,
            format: format.to_string(),
            command,
        }
    }

    #[test]
    fn test_read_report_short_read() {
        let mut stream = ReadableMemoryStream::new(&[1, 2, 3, 4, 5]);
        stream.set_position(3);

        let report = read_report(&mut stream, 10).unwrap();
        assert_eq!(report.offset, 3);
        assert_eq!(report.requested, 10);
        assert_eq!(report.read, 2);
        assert_eq!(report.position, 5);
        assert_eq!(report.hex, "0405");
    }

    #[test]
    fn test_read_report_past_end() {
        let mut stream = ReadableMemoryStream::new(&[1, 2]);
        stream.set_position(9);

        let report = read_report(&mut stream, u64::MAX).unwrap();
        assert_eq!(report.read, 0);
        assert_eq!(report.position, 9);
        assert!(report.bytes.is_empty());
    }

    #[test]
    fn test_cmd_info() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir);

        let output = execute(&make_cli(Commands::Info { file: path }, "json", 2)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["size"], 5);
        assert_eq!(value["blocks"], 3);
    }

    #[test]
    fn test_cmd_peek() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir);

        let command = Commands::Peek {
            file: path,
            offset: 1,
            length: 3,
        };
        let output = execute(&make_cli(command, "json", 8)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["hex"], "424344");
        assert_eq!(value["position"], 4);
    }

    #[test]
    fn test_cmd_peek_past_end_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir);

        let command = Commands::Peek {
            file: path,
            offset: 100,
            length: 4,
        };
        let output = execute(&make_cli(command, "text", 8)).unwrap();
        assert!(output.contains("0 of 4 bytes read"));
    }

    #[test]
    fn test_cmd_tail() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir);

        let command = Commands::Tail {
            file: path,
            length: 2,
        };
        let output = execute(&make_cli(command, "json", 8)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["offset"], 3);
        assert_eq!(value["hex"], "4445");
    }

    #[test]
    fn test_cmd_tail_longer_than_file() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir);

        let command = Commands::Tail {
            file: path,
            length: 50,
        };
        let output = execute(&make_cli(command, "json", 8)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["offset"], 0);
        assert_eq!(value["read"], 5);
    }

    #[test]
    fn test_cmd_copy() {
        let dir = TempDir::new().unwrap();
        let input = write_sample(&dir);
        let output_path = dir.path().join("out/copy.bin");

        let command = Commands::Copy {
            input: input.clone(),
            output: output_path.clone(),
        };
        let output = execute(&make_cli(command, "text", 2)).unwrap();
        assert!(output.contains("Copied 5 bytes in 3 blocks"));
        assert_eq!(
            std::fs::read(&output_path).unwrap(),
            std::fs::read(&input).unwrap()
        );
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir);

        let result = execute(&make_cli(Commands::Info { file: path }, "text", 0));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_input() {
        let command = Commands::Info {
            file: PathBuf::from("/nonexistent/input.pdf"),
        };
        let result = execute(&make_cli(command, "text", 8));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
