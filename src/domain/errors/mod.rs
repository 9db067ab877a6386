// Domain errors - Failure taxonomy for an export call

use std::fmt;

/// Domain-specific error types
///
/// Only conditions that make a non-empty, structurally valid document
/// impossible are represented here. Recoverable conditions (stale source
/// index, bad segment timing) are reported as [`ExportWarning`] instead.
///
/// [`ExportWarning`]: crate::domain::model::ExportWarning
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The source video list was empty
    NoSourcesProvided,
    /// Nothing left to export after selection
    NoValidSegments,
    /// The script could not be read as a generated script
    MalformedScript(String),
    /// Directory creation or file write failed
    ExportIo(String),
    /// Invalid arguments provided
    BadArgs(String),
    /// Configuration could not be loaded or is invalid
    ConfigError(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NoSourcesProvided => write!(f, "No video paths provided"),
            DomainError::NoValidSegments => write!(f, "No valid segments to export"),
            DomainError::MalformedScript(msg) => write!(f, "Malformed script: {}", msg),
            DomainError::ExportIo(msg) => write!(f, "Export I/O error: {}", msg),
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Name of the export stage that failed, for caller-facing reports
    pub fn stage(&self) -> &'static str {
        match self {
            DomainError::NoSourcesProvided | DomainError::BadArgs(_) => "validation",
            DomainError::NoValidSegments => "selection",
            DomainError::MalformedScript(_) => "script",
            DomainError::ExportIo(_) => "write",
            DomainError::ConfigError(_) => "configuration",
        }
    }
}
