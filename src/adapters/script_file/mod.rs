// Script file adapter - Loads generated scripts saved as JSON or YAML

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::error::SmartEditResult;
use crate::ports::*;
use async_trait::async_trait;
use std::path::Path;

/// Serialization used by a saved script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEncoding {
    Json,
    Yaml,
}

impl ScriptEncoding {
    /// Pick the encoding from the file extension, defaulting to JSON
    pub fn from_path(file_path: &str) -> Self {
        let extension = Path::new(file_path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        match extension.as_deref() {
            Some("yaml") | Some("yml") => ScriptEncoding::Yaml,
            _ => ScriptEncoding::Json,
        }
    }
}

/// Parse script text in the given encoding
pub fn parse_script(content: &str, encoding: ScriptEncoding) -> SmartEditResult<GeneratedScript> {
    let script = match encoding {
        ScriptEncoding::Json => serde_json::from_str(content)?,
        ScriptEncoding::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(script)
}

/// Script file adapter
#[derive(Debug, Clone, Default)]
pub struct ScriptFileAdapter;

impl ScriptFileAdapter {
    /// Create new script file adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScriptSourcePort for ScriptFileAdapter {
    async fn load_script(&self, file_path: &str) -> Result<GeneratedScript, DomainError> {
        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            DomainError::MalformedScript(format!("Failed to read {}: {}", file_path, e))
        })?;

        parse_script(&content, ScriptEncoding::from_path(file_path))
            .map_err(|e| DomainError::MalformedScript(format!("{}: {}", file_path, e)))
    }
}
