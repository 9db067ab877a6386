//! JSON dump of the generated script

use crate::domain::errors::DomainError;
use crate::encoder::{DocumentEncoder, TimelineDocument};

/// Writes the whole script, every segment included, as pretty JSON
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsonEncoder;

impl DocumentEncoder for JsonEncoder {
    fn encode(&self, document: &TimelineDocument<'_>) -> Result<String, DomainError> {
        serde_json::to_string_pretty(document.script)
            .map_err(|e| DomainError::ExportIo(format!("Failed to serialize script: {}", e)))
    }
}
