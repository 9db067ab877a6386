//! SmartEdit export CLI
//!
//! # Usage
//!
//! ```bash
//! smartedit export --script script.json --source a.mp4 --source b.mp4 --output cut.edl
//! smartedit timecode 3661.5 --fps 24
//! smartedit reel "My Clip.mp4" --dialect cmx3600
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use smartedit_export::app::DefaultAppContainer;
use smartedit_export::cli::{commands, Cli, Commands};
use smartedit_export::ports::LogLevel;
use smartedit_export::utils::{init_logging, LoggingConfig};

/// Main entry point for the SmartEdit export CLI
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();
    let level = LogLevel::parse(&cli.log_level)?;

    // Initialize logging
    init_logging(LoggingConfig {
        level,
        json: cli.log_json,
    })?;

    // Execute the requested command
    match cli.command {
        Commands::Export(args) => {
            info!("Executing export command");
            let container = DefaultAppContainer::with_log_level(level);
            commands::export(&container, args).await?;
        }
        Commands::Timecode(args) => commands::timecode(args)?,
        Commands::Reel(args) => commands::reel(args)?,
    }

    Ok(())
}
