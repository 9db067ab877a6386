//! CLI module for SmartEdit export
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{ExportArgs, ReelArgs, TimecodeArgs};

/// SmartEdit timeline exporter
///
/// Turns an edited transcript script into an edit decision list or an XML
/// timeline that a non-linear editor can import.
#[derive(Parser, Debug)]
#[command(name = "smartedit")]
#[command(about = "SmartEdit export - Edited scripts to EDL and XML timelines")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level, used when RUST_LOG is unset
    #[arg(long, default_value = "info", env = "SMARTEDIT_LOG_LEVEL", global = true)]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a generated script as a timeline document
    Export(ExportArgs),
    /// Print the timecode for a position in seconds
    Timecode(TimecodeArgs),
    /// Print the reel id derived from a source file name
    Reel(ReelArgs),
}
