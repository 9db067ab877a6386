// TOML config adapter - Configuration management using TOML files

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::error::SmartEditResult;
use crate::ports::*;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "smartedit.toml";

/// On-disk configuration layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub export: ExportSection,
    /// Source index (as a string key) to display name
    #[serde(default)]
    pub clip_names: BTreeMap<String, String>,
}

/// `[export]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportSection {
    pub fps: Option<u32>,
    pub dialect: Option<String>,
    pub format: Option<String>,
    pub sequence_name: Option<String>,
    pub min_segment_duration: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ConfigFile {
    /// Parse TOML text
    pub fn parse(toml_content: &str) -> SmartEditResult<Self> {
        Ok(toml::from_str(toml_content)?)
    }

    /// Overlay this file onto `settings`
    pub fn apply_to(&self, settings: &mut ExportSettings) -> Result<(), DomainError> {
        let export = &self.export;
        if let Some(fps) = export.fps {
            settings.fps = fps;
        }
        if let Some(dialect) = &export.dialect {
            settings.dialect = EdlDialect::parse(dialect)?;
        }
        if let Some(format) = &export.format {
            settings.format = ExportFormat::parse(format)?;
        }
        if let Some(name) = &export.sequence_name {
            settings.sequence_name = name.clone();
        }
        if export.min_segment_duration.is_some() {
            settings.min_segment_duration = export.min_segment_duration;
        }
        if let Some(width) = export.width {
            settings.width = width;
        }
        if let Some(height) = export.height {
            settings.height = height;
        }
        for (key, name) in &self.clip_names {
            let index = key.trim().parse::<usize>().map_err(|e| {
                DomainError::ConfigError(format!("Invalid clip name index {}: {}", key, e))
            })?;
            settings.clip_names.insert(index, name.clone());
        }
        Ok(())
    }
}

/// TOML configuration adapter
pub struct TomlConfigAdapter {
    config: RwLock<ConfigFile>,
    config_file_path: RwLock<Option<PathBuf>>,
}

impl TomlConfigAdapter {
    /// Create new TOML config adapter holding only defaults
    pub fn new() -> Self {
        Self {
            config: RwLock::new(ConfigFile::default()),
            config_file_path: RwLock::new(None),
        }
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigPort for TomlConfigAdapter {
    async fn load_config(&self, file_path: &str) -> Result<(), DomainError> {
        let path = PathBuf::from(file_path);

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::ConfigError(format!("Failed to read config file {}: {}", file_path, e))
        })?;

        let parsed = ConfigFile::parse(&content).map_err(|e| {
            DomainError::ConfigError(format!("Failed to parse TOML config {}: {}", file_path, e))
        })?;

        // Reject bad values at load time rather than on first export
        let mut checked = ExportSettings::default();
        parsed.apply_to(&mut checked)?;

        *self.config.write().await = parsed;
        *self.config_file_path.write().await = Some(path);
        tracing::info!("Loaded configuration from {}", file_path);
        Ok(())
    }

    async fn overlay_settings(&self, settings: &mut ExportSettings) -> Result<(), DomainError> {
        self.config.read().await.apply_to(settings)
    }

    async fn get_config_file_path(&self) -> Option<String> {
        self.config_file_path
            .read()
            .await
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
    }
}
