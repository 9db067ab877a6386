//! Configuration initialization and hierarchy management

use std::path::Path;

use tracing::{debug, info};

use crate::adapters::toml_config::DEFAULT_CONFIG_FILE;
use crate::cli::ExportArgs;
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::domain::rules::file_stem;
use crate::ports::ConfigPort;

/// Resolve export settings following precedence: CLI > File > Defaults
pub async fn resolve_export_settings(
    config_port: &dyn ConfigPort,
    args: &ExportArgs,
) -> Result<ExportSettings, DomainError> {
    // Step 1: Defaults, with the sequence named after the output file
    let mut settings = ExportSettings::default();
    let stem = file_stem(&args.output);
    if !stem.is_empty() {
        settings.sequence_name = stem;
    }

    // Step 2: Overlay the config file, if any
    load_config_file(config_port, args.config.as_deref()).await?;
    config_port.overlay_settings(&mut settings).await?;
    if let Some(path) = config_port.get_config_file_path().await {
        info!("Using configuration from {}", path);
    }

    // Step 3: Override with CLI arguments
    apply_cli_overrides(&mut settings, args)?;

    settings.validate()?;
    debug!("Resolved export settings: {:?}", settings);
    Ok(settings)
}

/// Load an explicit config file, or the default one when it exists
async fn load_config_file(
    config_port: &dyn ConfigPort,
    explicit_path: Option<&str>,
) -> Result<(), DomainError> {
    match explicit_path {
        Some(path) => config_port.load_config(path).await,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            config_port.load_config(DEFAULT_CONFIG_FILE).await
        }
        None => {
            info!("No config file loaded, using defaults");
            Ok(())
        }
    }
}

/// Apply CLI argument overrides to settings
fn apply_cli_overrides(settings: &mut ExportSettings, args: &ExportArgs) -> Result<(), DomainError> {
    let mut cli_overrides = 0;

    if let Some(fps) = args.fps {
        settings.fps = fps;
        cli_overrides += 1;
    }
    if let Some(dialect) = &args.dialect {
        settings.dialect = EdlDialect::parse(dialect)?;
        cli_overrides += 1;
    }
    if let Some(format) = &args.format {
        settings.format = ExportFormat::parse(format)?;
        cli_overrides += 1;
    }
    if let Some(name) = &args.sequence_name {
        settings.sequence_name = name.clone();
        cli_overrides += 1;
    }
    if args.min_duration.is_some() {
        settings.min_segment_duration = args.min_duration;
        cli_overrides += 1;
    }
    if let Some(width) = args.width {
        settings.width = width;
        cli_overrides += 1;
    }
    if let Some(height) = args.height {
        settings.height = height;
        cli_overrides += 1;
    }
    for (index, name) in &args.clip_names {
        settings.clip_names.insert(*index, name.clone());
        cli_overrides += 1;
    }

    if cli_overrides > 0 {
        info!("Applied {} CLI configuration overrides", cli_overrides);
    }
    Ok(())
}
