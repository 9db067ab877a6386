// Domain models - Core types and data structures

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Default frame rate for timecode calculations
pub const DEFAULT_FPS: u32 = 24;

/// Sequence name used when neither the caller nor the output path supplies one
pub const DEFAULT_SEQUENCE_NAME: &str = "SmartEdit";

/// Display-name overrides keyed by source index
pub type ClipNameMap = BTreeMap<usize, String>;

fn default_keep() -> bool {
    true
}

/// One timed piece of the edited script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start in the source video, in seconds
    pub start_time: f64,
    /// End in the source video, in seconds
    pub end_time: f64,
    /// Transcript excerpt, only used for comments
    #[serde(default)]
    pub content: String,
    /// Index into the ordered source path list
    #[serde(default, alias = "video_index")]
    pub source_index: usize,
    /// Whether the segment survives the edit
    #[serde(default = "default_keep")]
    pub keep: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_segment_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Segment {
    /// Create a kept segment with no provenance information
    pub fn new(start_time: f64, end_time: f64, content: impl Into<String>, source_index: usize) -> Self {
        Self {
            start_time,
            end_time,
            content: content.into(),
            source_index,
            keep: true,
            original_segment_id: None,
            reason: None,
        }
    }

    /// Builder-style setter for the keep flag
    pub fn with_keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    /// Source duration in seconds (negative for inverted timing)
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// How the script-generation collaborator produced a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptOrigin {
    /// Produced by the AI editing pass
    #[default]
    Generated,
    /// Produced by the rule-based path after the AI pass failed
    Fallback,
}

impl fmt::Display for ScriptOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptOrigin::Generated => write!(f, "generated"),
            ScriptOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// Script handed over by the script-generation collaborator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedScript {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub target_duration_minutes: u32,
    #[serde(default)]
    pub estimated_duration_seconds: f64,
    #[serde(default)]
    pub original_duration_seconds: f64,
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default)]
    pub origin: ScriptOrigin,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl GeneratedScript {
    /// Create a script holding only segments
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }
}

/// A segment placed on the output timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry<'a> {
    pub segment: &'a Segment,
    /// Source index after out-of-range substitution
    pub source_index: usize,
    pub timeline_start: f64,
    pub timeline_end: f64,
}

/// SMPTE non-drop timecode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Timecode {
    pub const ZERO: Timecode = Timecode {
        hours: 0,
        minutes: 0,
        seconds: 0,
        frames: 0,
    };

    /// Convert seconds to a timecode at `fps`.
    ///
    /// Negative and NaN input clamps to zero. A frame count that rounds up to
    /// `fps` carries into the seconds, minutes and hours. Hours cap at 23 while
    /// the other fields keep their values; a carry into hour 24 saturates to
    /// `23:59:59:(fps-1)`.
    pub fn from_seconds(seconds: f64, fps: u32) -> Self {
        let fps = fps.max(1);
        if seconds.is_nan() || seconds <= 0.0 {
            return Self::ZERO;
        }
        if seconds.is_infinite() {
            return Self::max_for(fps);
        }

        let whole_hours = (seconds / 3600.0).floor() as u64;
        let mut hours = whole_hours;
        let mut minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
        let mut secs = (seconds % 60.0).floor() as u64;
        let mut frames = ((seconds % 1.0) * f64::from(fps)).round_ties_even() as u64;

        if frames >= u64::from(fps) {
            frames = 0;
            secs += 1;
            if secs >= 60 {
                secs = 0;
                minutes += 1;
                if minutes >= 60 {
                    minutes = 0;
                    hours += 1;
                }
            }
        }

        // A carry out of the last frame of the day must not wrap back to 23:00
        if hours > 23 && whole_hours <= 23 {
            return Self::max_for(fps);
        }

        Self {
            hours: hours.min(23) as u32,
            minutes: minutes.min(59) as u32,
            seconds: secs.min(59) as u32,
            frames: frames.min(u64::from(fps - 1)) as u32,
        }
    }

    /// Largest representable timecode at `fps`
    pub fn max_for(fps: u32) -> Self {
        Self {
            hours: 23,
            minutes: 59,
            seconds: 59,
            frames: fps.max(1) - 1,
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Format seconds as `HH:MM:SS:FF`
pub fn seconds_to_timecode(seconds: f64, fps: u32) -> String {
    Timecode::from_seconds(seconds, fps).to_string()
}

/// Whole frames elapsed at `seconds`, truncating; negative input gives zero
pub fn seconds_to_frames(seconds: f64, fps: u32) -> u64 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    (seconds * f64::from(fps)).floor() as u64
}

/// EDL grammar variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdlDialect {
    /// Reel ids sanitised from the source file stem
    #[default]
    Standard,
    /// Reel ids assigned by letter (`AX`, `BX`, ...)
    Cmx3600,
}

impl EdlDialect {
    /// Parse dialect from string
    pub fn parse(dialect_str: &str) -> Result<Self, DomainError> {
        match dialect_str.trim().to_lowercase().as_str() {
            "standard" => Ok(EdlDialect::Standard),
            "cmx3600" | "cmx" => Ok(EdlDialect::Cmx3600),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid EDL dialect: {}. Valid dialects: standard, cmx3600",
                dialect_str
            ))),
        }
    }
}

impl fmt::Display for EdlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdlDialect::Standard => write!(f, "standard"),
            EdlDialect::Cmx3600 => write!(f, "cmx3600"),
        }
    }
}

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Edl,
    Xml,
    Text,
    Json,
}

impl ExportFormat {
    /// Parse export format from string
    pub fn parse(format_str: &str) -> Result<Self, DomainError> {
        match format_str.trim().to_lowercase().as_str() {
            "edl" => Ok(ExportFormat::Edl),
            "xml" | "xmeml" => Ok(ExportFormat::Xml),
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid export format: {}. Valid formats: edl, xml, text, json",
                format_str
            ))),
        }
    }

    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Edl => "edl",
            ExportFormat::Xml => "xml",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Resolved settings for one export call
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub fps: u32,
    pub dialect: EdlDialect,
    pub format: ExportFormat,
    pub sequence_name: String,
    /// Minimum kept segment length; one frame when unset
    pub min_segment_duration: Option<f64>,
    pub width: u32,
    pub height: u32,
    pub clip_names: ClipNameMap,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            dialect: EdlDialect::default(),
            format: ExportFormat::default(),
            sequence_name: DEFAULT_SEQUENCE_NAME.to_string(),
            min_segment_duration: None,
            width: 1920,
            height: 1080,
            clip_names: ClipNameMap::new(),
        }
    }
}

impl ExportSettings {
    /// Minimum segment duration in seconds
    pub fn min_duration(&self) -> f64 {
        self.min_segment_duration
            .unwrap_or_else(|| 1.0 / f64::from(self.fps.max(1)))
    }

    /// Validate settings before any processing
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.fps == 0 {
            return Err(DomainError::BadArgs("Frame rate must be positive".to_string()));
        }
        if let Some(min) = self.min_segment_duration {
            if !min.is_finite() || min < 0.0 {
                return Err(DomainError::BadArgs(format!(
                    "Minimum segment duration must be a non-negative number, got {}",
                    min
                )));
            }
        }
        if self.width == 0 || self.height == 0 {
            return Err(DomainError::BadArgs(
                "Frame dimensions cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Recoverable condition met while building a document
#[derive(Debug, Clone, PartialEq)]
pub enum ExportWarning {
    /// Segment dropped for non-positive or sub-minimum duration
    SegmentTimingInvalid { position: usize, start: f64, end: f64 },
    /// Every segment was discarded, so all of them are exported
    AllSegmentsDiscarded { count: usize },
    /// Segment referenced a missing source; source 0 used instead
    SourceIndexOutOfRange { position: usize, index: usize, source_count: usize },
    /// Source file does not exist on disk
    SourceMissing { path: String },
    /// More edits than the three-digit edit number field holds
    EditNumberOverflow { count: usize },
}

impl fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportWarning::SegmentTimingInvalid { position, start, end } => write!(
                f,
                "Skipping segment {} with invalid timing: {}s to {}s",
                position, start, end
            ),
            ExportWarning::AllSegmentsDiscarded { count } => write!(
                f,
                "No segments marked to keep, using all {} segments",
                count
            ),
            ExportWarning::SourceIndexOutOfRange { position, index, source_count } => write!(
                f,
                "Segment {} references video index {} but only {} source(s) exist, using 0",
                position, index, source_count
            ),
            ExportWarning::SourceMissing { path } => write!(f, "Video file not found: {}", path),
            ExportWarning::EditNumberOverflow { count } => write!(
                f,
                "{} edits exceed the 3-digit edit number field, numbers widened",
                count
            ),
        }
    }
}

#[cfg(test)]
mod tests;
