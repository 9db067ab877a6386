//! Document encoders
//!
//! Each encoder turns a positioned timeline into the text of one interchange
//! format. Encoders are pure: they never touch the filesystem, so every
//! grammar rule can be tested on strings alone.

use crate::domain::errors::DomainError;
use crate::domain::model::{ClipNameMap, GeneratedScript, TimelineEntry};
use crate::domain::rules::file_name;

pub mod edl;
pub mod json;
pub mod text;
pub mod xmeml;

pub use edl::EdlEncoder;
pub use json::JsonEncoder;
pub use text::TextEncoder;
pub use xmeml::XmemlEncoder;

/// Everything an encoder needs to render one export
#[derive(Debug, Clone)]
pub struct TimelineDocument<'a> {
    pub sequence_name: &'a str,
    pub entries: &'a [TimelineEntry<'a>],
    pub source_paths: &'a [String],
    pub clip_names: &'a ClipNameMap,
    pub script: &'a GeneratedScript,
}

impl<'a> TimelineDocument<'a> {
    /// Display name for a source: the caller override, else the file name
    pub fn clip_name(&self, source_index: usize) -> String {
        if let Some(name) = self.clip_names.get(&source_index) {
            return name.clone();
        }
        self.source_paths
            .get(source_index)
            .map(|path| file_name(path))
            .unwrap_or_default()
    }

    /// Total timeline length in seconds
    pub fn duration(&self) -> f64 {
        self.entries.last().map(|entry| entry.timeline_end).unwrap_or(0.0)
    }
}

/// Common interface over the export formats
pub trait DocumentEncoder {
    fn encode(&self, document: &TimelineDocument<'_>) -> Result<String, DomainError>;
}
