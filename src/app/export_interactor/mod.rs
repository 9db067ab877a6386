// Export interactor - Orchestrates script to timeline document export

use std::sync::Arc;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::encoder::edl::MAX_EDIT_NUMBER;
use crate::encoder::{
    DocumentEncoder, EdlEncoder, JsonEncoder, TextEncoder, TimelineDocument, XmemlEncoder,
};
use crate::ports::*;

/// Interactor for the export use case
pub struct ExportInteractor {
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
}

/// Document text plus what was recovered while building it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub contents: String,
    pub edit_count: usize,
    pub timeline_duration: f64,
    pub used_fallback: bool,
    pub warnings: Vec<ExportWarning>,
}

impl ExportInteractor {
    /// Create new export interactor with injected ports
    pub fn new(fs_port: Arc<dyn FsPort>, log_port: Arc<dyn LogPort>) -> Self {
        Self { fs_port, log_port }
    }

    /// Run one export: select, place, encode and write
    pub async fn execute(&self, request: ExportRequest) -> Result<ExportResponse, DomainError> {
        match self.export(request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                self.log_port
                    .error(&format!("Export failed during {}: {}", e.stage(), e))
                    .await;
                Err(e)
            }
        }
    }

    async fn export(&self, request: ExportRequest) -> Result<ExportResponse, DomainError> {
        let settings = &request.settings;
        settings.validate()?;
        if request.source_paths.is_empty() {
            return Err(DomainError::NoSourcesProvided);
        }

        self.log_port
            .info(&format!(
                "Exporting {} script segment(s) from {} video(s) as {}",
                request.script.segments.len(),
                request.source_paths.len(),
                settings.format
            ))
            .await;

        let mut warnings = Vec::new();
        for path in &request.source_paths {
            let exists = match self.fs_port.file_exists(path).await {
                Ok(exists) => exists,
                Err(e) => {
                    self.log_port.debug(&format!("Cannot check source: {}", e)).await;
                    false
                }
            };
            if !exists {
                warnings.push(ExportWarning::SourceMissing { path: path.clone() });
            }
        }

        let source_paths = match settings.format {
            ExportFormat::Xml => self.absolute_sources(&request.source_paths).await?,
            ExportFormat::Edl | ExportFormat::Text | ExportFormat::Json => {
                request.source_paths.clone()
            }
        };
        self.log_port
            .debug(&format!(
                "Encoding at {} fps, minimum segment {:.3}s",
                settings.fps,
                settings.min_duration()
            ))
            .await;

        let rendered = Self::render(&request.script, &source_paths, settings)?;
        warnings.extend(rendered.warnings.iter().cloned());
        for warning in &warnings {
            self.log_port.warn(&warning.to_string()).await;
        }

        self.fs_port
            .write_text(&request.output_path, &rendered.contents)
            .await?;
        self.log_port
            .info(&format!(
                "Exported {} edit(s), {:.2}s, to {}",
                rendered.edit_count, rendered.timeline_duration, request.output_path
            ))
            .await;

        Ok(ExportResponse {
            success: true,
            output_path: request.output_path,
            format: settings.format,
            edit_count: rendered.edit_count,
            timeline_duration: rendered.timeline_duration,
            used_fallback: rendered.used_fallback,
            script_origin: request.script.origin,
            warnings,
        })
    }

    /// Build the document text without touching the filesystem
    pub fn render(
        script: &GeneratedScript,
        source_paths: &[String],
        settings: &ExportSettings,
    ) -> Result<RenderedDocument, DomainError> {
        settings.validate()?;
        if source_paths.is_empty() {
            return Err(DomainError::NoSourcesProvided);
        }

        let selection = SegmentSelector::select(script, settings.min_duration());
        if selection.segments.is_empty() {
            return Err(DomainError::NoValidSegments);
        }

        let (entries, placement_warnings) =
            TimelineAccumulator::accumulate(&selection.segments, source_paths.len());

        let mut warnings = selection.warnings;
        warnings.extend(placement_warnings);
        if settings.format == ExportFormat::Edl && entries.len() > MAX_EDIT_NUMBER {
            warnings.push(ExportWarning::EditNumberOverflow {
                count: entries.len(),
            });
        }

        let document = TimelineDocument {
            sequence_name: &settings.sequence_name,
            entries: &entries,
            source_paths,
            clip_names: &settings.clip_names,
            script,
        };
        let contents = match settings.format {
            ExportFormat::Edl => EdlEncoder::new(settings.fps, settings.dialect).encode(&document)?,
            ExportFormat::Xml => {
                XmemlEncoder::new(settings.fps, settings.width, settings.height).encode(&document)?
            }
            ExportFormat::Text => TextEncoder.encode(&document)?,
            ExportFormat::Json => JsonEncoder.encode(&document)?,
        };

        Ok(RenderedDocument {
            contents,
            edit_count: entries.len(),
            timeline_duration: document.duration(),
            used_fallback: selection.used_fallback,
            warnings,
        })
    }

    async fn absolute_sources(&self, source_paths: &[String]) -> Result<Vec<String>, DomainError> {
        let mut resolved = Vec::with_capacity(source_paths.len());
        for path in source_paths {
            resolved.push(self.fs_port.absolute_path(path).await?);
        }
        Ok(resolved)
    }
}

/// Request for one export
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub script: GeneratedScript,
    pub source_paths: Vec<String>,
    pub output_path: String,
    pub settings: ExportSettings,
}

impl ExportRequest {
    /// Create new export request with validation
    pub fn new(
        script: GeneratedScript,
        source_paths: Vec<String>,
        output_path: String,
        settings: ExportSettings,
    ) -> Result<Self, DomainError> {
        if output_path.trim().is_empty() {
            return Err(DomainError::BadArgs(
                "Output path cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            script,
            source_paths,
            output_path,
            settings,
        })
    }
}

/// Response from a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResponse {
    pub success: bool,
    pub output_path: String,
    pub format: ExportFormat,
    pub edit_count: usize,
    pub timeline_duration: f64,
    pub used_fallback: bool,
    pub script_origin: ScriptOrigin,
    pub warnings: Vec<ExportWarning>,
}
