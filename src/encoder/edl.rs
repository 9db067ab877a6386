//! Edit Decision List encoder
//!
//! Produces the line-oriented EDL grammar:
//!
//! ```text
//! TITLE: <sequence name>
//! FCM: NON-DROP FRAME
//! 001  CLIP     AA/V  C        00:00:00:00 00:00:03:00 00:00:00:00 00:00:03:00
//! * FROM CLIP NAME: clip.mp4
//! * SEGMENT: Intro
//! ```
//!
//! The standard and CMX3600 dialects only differ in how reel ids are derived.

use crate::domain::errors::DomainError;
use crate::domain::model::{EdlDialect, Timecode, DEFAULT_FPS};
use crate::domain::rules::ReelNamer;
use crate::encoder::{DocumentEncoder, TimelineDocument};

/// Longest segment comment before truncation
pub const MAX_COMMENT_CHARS: usize = 60;

/// Highest edit number that fits the three-digit field
pub const MAX_EDIT_NUMBER: usize = 999;

/// Track designation for combined audio and video
const TRACK_AUDIO_VIDEO: &str = "AA/V";

/// Transition code for a cut
const TRANSITION_CUT: &str = "C";

/// EDL encoder for one dialect and frame rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdlEncoder {
    pub fps: u32,
    pub dialect: EdlDialect,
}

impl Default for EdlEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_FPS, EdlDialect::Standard)
    }
}

impl EdlEncoder {
    pub fn new(fps: u32, dialect: EdlDialect) -> Self {
        Self { fps, dialect }
    }

    fn event_line(
        &self,
        edit_number: usize,
        reel: &str,
        source_in: f64,
        source_out: f64,
        record_in: f64,
        record_out: f64,
    ) -> String {
        format!(
            "{:03}  {:<8} {}  {}        {} {} {} {} ",
            edit_number,
            reel,
            TRACK_AUDIO_VIDEO,
            TRANSITION_CUT,
            Timecode::from_seconds(source_in, self.fps),
            Timecode::from_seconds(source_out, self.fps),
            Timecode::from_seconds(record_in, self.fps),
            Timecode::from_seconds(record_out, self.fps),
        )
    }
}

impl DocumentEncoder for EdlEncoder {
    fn encode(&self, document: &TimelineDocument<'_>) -> Result<String, DomainError> {
        let mut lines = vec![
            format!("TITLE: {}", document.sequence_name),
            "FCM: NON-DROP FRAME".to_string(),
        ];

        for (i, entry) in document.entries.iter().enumerate() {
            let reel = ReelNamer::reel_for(self.dialect, document.source_paths, entry.source_index);
            lines.push(self.event_line(
                i + 1,
                &reel,
                entry.segment.start_time,
                entry.segment.end_time,
                entry.timeline_start,
                entry.timeline_end,
            ));
            lines.push(format!(
                "* FROM CLIP NAME: {}",
                document.clip_name(entry.source_index)
            ));

            if let Some(comment) = segment_comment(&entry.segment.content) {
                lines.push(format!("* SEGMENT: {}", comment));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Flatten `content` onto one line and cap it at [`MAX_COMMENT_CHARS`].
///
/// Returns `None` for empty content.
pub fn segment_comment(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }

    let flat: String = content
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() > MAX_COMMENT_CHARS {
        let head: String = flat.chars().take(MAX_COMMENT_CHARS - 3).collect();
        Some(format!("{}...", head))
    } else {
        Some(flat)
    }
}
