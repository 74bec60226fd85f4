//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::stream::DEFAULT_BLOCK_SIZE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// memstream-rs: inspect and copy files through in-memory byte streams.
///
/// Every command loads its input into a readable memory stream and drives
/// it with the same positional calls a document engine would make.
#[derive(Parser, Debug)]
#[command(name = "memstream-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Block size in bytes for stream transfers.
    #[arg(
        long,
        env = "MEMSTREAM_BLOCK_SIZE",
        default_value_t = DEFAULT_BLOCK_SIZE,
        global = true
    )]
    pub block_size: usize,

    /// Enable verbose (debug) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show stream size and block layout for a file.
    Info {
        /// Path to the input file.
        file: PathBuf,
    },

    /// Read bytes at an absolute offset.
    Peek {
        /// Path to the input file.
        file: PathBuf,

        /// Offset from the start in bytes.
        #[arg(long, default_value = "0")]
        offset: u64,

        /// Number of bytes to read.
        #[arg(short = 'n', long, default_value = "64")]
        length: usize,
    },

    /// Read the last bytes of a file.
    Tail {
        /// Path to the input file.
        file: PathBuf,

        /// Number of bytes from the end.
        #[arg(short = 'n', long, default_value = "64")]
        length: u64,
    },

    /// Copy a file through a reader/writer stream pair.
    Copy {
        /// Path to the input file.
        input: PathBuf,

        /// Path to the output file.
        output: PathBuf,
    },
}
