//! CLI layer for memstream-rs.
//!
//! Provides the command-line interface using clap, with commands for
//! inspecting and copying files through memory streams.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
