//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::app::container::AppContainer;
use crate::app::export_interactor::{ExportRequest, ExportResponse};
use crate::cli::args::{ExportArgs, ReelArgs, TimecodeArgs};
use crate::config_initialization::resolve_export_settings;
use crate::domain::model::{seconds_to_timecode, EdlDialect};
use crate::domain::rules::ReelNamer;

/// Execute the export command
pub async fn export(container: &dyn AppContainer, args: ExportArgs) -> Result<()> {
    info!("Starting export operation");
    info!("Script: {}", args.script);
    info!("Output: {}", args.output);

    let settings = resolve_export_settings(container.config_port().as_ref(), &args)
        .await
        .context("Failed to resolve export settings")?;

    let script = container
        .script_port()
        .load_script(&args.script)
        .await
        .context("Failed to load script")?;

    let request = ExportRequest::new(script, args.sources, args.output, settings)?;
    let response = container
        .export_interactor()
        .execute(request)
        .await
        .context("Export failed")?;

    display_export_response(&response);
    Ok(())
}

/// Execute the timecode command
pub fn timecode(args: TimecodeArgs) -> Result<()> {
    if args.fps == 0 {
        return Err(anyhow::anyhow!("Frame rate must be positive"));
    }
    println!("{}", seconds_to_timecode(args.seconds, args.fps));
    Ok(())
}

/// Execute the reel command
pub fn reel(args: ReelArgs) -> Result<()> {
    let dialect = EdlDialect::parse(&args.dialect)?;
    println!(
        "{}",
        ReelNamer::reel_for(dialect, std::slice::from_ref(&args.name), 0)
    );
    Ok(())
}

/// Display export result in human-readable format
fn display_export_response(response: &ExportResponse) {
    println!("Exported {} to {}", response.format, response.output_path);
    println!("Edits: {}", response.edit_count);
    println!("Timeline Duration: {:.2}s", response.timeline_duration);
    println!("Script Origin: {}", response.script_origin);
    if response.used_fallback {
        println!("No segment passed selection; all segments were exported");
    }
    if !response.warnings.is_empty() {
        println!("Warnings: {}", response.warnings.len());
    }
}
