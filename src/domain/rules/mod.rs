// Domain rules - Segment selection, timeline placement and reel naming

use std::path::Path;

use crate::domain::model::*;

/// Reel id used when a file stem has nothing alphanumeric in it
pub const FALLBACK_REEL_NAME: &str = "CLIP001";

/// Maximum reel id width in an EDL event line
pub const MAX_REEL_LEN: usize = 8;

/// Segments picked for export, with what was dropped along the way
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub segments: Vec<&'a Segment>,
    pub warnings: Vec<ExportWarning>,
    /// True when every segment was discarded and all of them are used
    pub used_fallback: bool,
}

/// Business rules for choosing which segments reach the timeline
pub struct SegmentSelector;

impl SegmentSelector {
    /// Keep segments flagged `keep` that last at least `min_duration`.
    ///
    /// When that leaves nothing but the script had segments, every segment is
    /// returned in its original order so an export always produces output.
    pub fn select(script: &GeneratedScript, min_duration: f64) -> Selection<'_> {
        let mut segments = Vec::new();
        let mut warnings = Vec::new();

        for (position, segment) in script.segments.iter().enumerate() {
            if !segment.keep {
                continue;
            }
            if Self::has_valid_timing(segment, min_duration) {
                segments.push(segment);
            } else {
                warnings.push(ExportWarning::SegmentTimingInvalid {
                    position,
                    start: segment.start_time,
                    end: segment.end_time,
                });
            }
        }

        let used_fallback = segments.is_empty() && !script.segments.is_empty();
        if used_fallback {
            warnings.push(ExportWarning::AllSegmentsDiscarded {
                count: script.segments.len(),
            });
            segments = script.segments.iter().collect();
        }

        Selection {
            segments,
            warnings,
            used_fallback,
        }
    }

    fn has_valid_timing(segment: &Segment, min_duration: f64) -> bool {
        segment.end_time > segment.start_time && segment.duration() >= min_duration
    }
}

/// Business rules for placing segments back to back on the output timeline
pub struct TimelineAccumulator;

impl TimelineAccumulator {
    /// Place `segments` contiguously from zero, in input order.
    ///
    /// Source indices past the end of `source_count` resolve to source 0.
    pub fn accumulate<'a>(
        segments: &[&'a Segment],
        source_count: usize,
    ) -> (Vec<TimelineEntry<'a>>, Vec<ExportWarning>) {
        let mut entries = Vec::with_capacity(segments.len());
        let mut warnings = Vec::new();
        let mut cursor = 0.0;

        for (position, segment) in segments.iter().enumerate() {
            let source_index = if segment.source_index < source_count {
                segment.source_index
            } else {
                warnings.push(ExportWarning::SourceIndexOutOfRange {
                    position,
                    index: segment.source_index,
                    source_count,
                });
                0
            };

            let timeline_end = cursor + segment.duration();
            entries.push(TimelineEntry {
                segment,
                source_index,
                timeline_start: cursor,
                timeline_end,
            });
            cursor = timeline_end;
        }

        (entries, warnings)
    }
}

/// Reel id derivation for both EDL dialects
pub struct ReelNamer;

impl ReelNamer {
    /// Reel id for `source_index` out of `source_paths` under `dialect`
    pub fn reel_for(dialect: EdlDialect, source_paths: &[String], source_index: usize) -> String {
        match dialect {
            EdlDialect::Standard => {
                let stem = source_paths
                    .get(source_index)
                    .map(|path| file_stem(path))
                    .unwrap_or_default();
                sanitize_reel_name(&stem)
            }
            EdlDialect::Cmx3600 => cmx_reel_name(source_paths.len(), source_index),
        }
    }
}

/// Uppercase, replace non-alphanumerics with `_`, truncate to eight characters.
///
/// A result with no alphanumeric character becomes [`FALLBACK_REEL_NAME`].
pub fn sanitize_reel_name(filename_stem: &str) -> String {
    let sanitized: String = filename_stem
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(MAX_REEL_LEN)
        .collect();

    if sanitized.chars().any(char::is_alphanumeric) {
        sanitized
    } else {
        FALLBACK_REEL_NAME.to_string()
    }
}

/// `AX` for a single source, otherwise a letter code per index followed by `X`.
///
/// Letters run `A`..`Z`, then `AA`, `AB`, ... so indices past 25 stay valid.
pub fn cmx_reel_name(source_count: usize, source_index: usize) -> String {
    if source_count <= 1 {
        return "AX".to_string();
    }
    format!("{}X", reel_letters(source_index))
}

fn reel_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Final path component without its extension
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Final path component, or the whole path when it has none
pub fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}
