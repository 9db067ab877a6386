//! Final Cut Pro 7 / Premiere XML (xmeml) encoder
//!
//! Emits a single sequence with one video and one audio track. Each source
//! gets one `<file>` definition, written in full on first use and referenced
//! by id afterwards.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::errors::DomainError;
use crate::domain::model::{seconds_to_frames, DEFAULT_FPS};
use crate::domain::rules::{file_name, file_stem};
use crate::encoder::{DocumentEncoder, TimelineDocument};

/// Extra source length, in seconds, advertised past the last used frame
const SOURCE_TAIL_SECONDS: f64 = 300.0;

/// Bytes escaped in a `file://` path: everything but unreserved characters and `/`
const PATH_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// xmeml encoder for one frame rate and frame size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XmemlEncoder {
    pub fps: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for XmemlEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_FPS, 1920, 1080)
    }
}

/// One clip placed in frames
struct FrameClip {
    source_index: usize,
    source_in: u64,
    source_out: u64,
    start: u64,
    end: u64,
}

impl XmemlEncoder {
    pub fn new(fps: u32, width: u32, height: u32) -> Self {
        Self { fps, width, height }
    }

    /// `TRUE` for the rates editors treat as NTSC timebases
    pub fn ntsc(&self) -> &'static str {
        if matches!(self.fps, 24 | 30 | 60) {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    fn rate(&self, indent: &str) -> String {
        format!(
            "{i}<rate>\n{i}  <timebase>{}</timebase>\n{i}  <ntsc>{}</ntsc>\n{i}</rate>\n",
            self.fps,
            self.ntsc(),
            i = indent
        )
    }

    /// Place entries in whole frames, skipping any that round to nothing
    fn frame_clips(&self, document: &TimelineDocument<'_>) -> Vec<FrameClip> {
        let mut clips = Vec::new();
        let mut position = 0;
        for entry in document.entries {
            let source_in = seconds_to_frames(entry.segment.start_time, self.fps);
            let source_out = seconds_to_frames(entry.segment.end_time, self.fps);
            let duration = source_out.saturating_sub(source_in);
            if duration == 0 {
                continue;
            }
            clips.push(FrameClip {
                source_index: entry.source_index,
                source_in,
                source_out,
                start: position,
                end: position + duration,
            });
            position += duration;
        }
        clips
    }

    fn source_duration(&self, clips: &[FrameClip], source_index: usize) -> u64 {
        let last_used = clips
            .iter()
            .filter(|clip| clip.source_index == source_index)
            .map(|clip| clip.source_out)
            .max()
            .unwrap_or(0);
        last_used + seconds_to_frames(SOURCE_TAIL_SECONDS, self.fps)
    }

    fn write_file(
        &self,
        out: &mut String,
        document: &TimelineDocument<'_>,
        clips: &[FrameClip],
        source_index: usize,
        defined: &mut BTreeSet<usize>,
        indent: &str,
    ) {
        let id = source_index + 1;
        if !defined.insert(source_index) {
            let _ = writeln!(out, "{}<file id=\"file-{}\"/>", indent, id);
            return;
        }

        let path = document
            .source_paths
            .get(source_index)
            .map(String::as_str)
            .unwrap_or_default();
        let duration = self.source_duration(clips, source_index);
        let inner = format!("{}  ", indent);

        let _ = writeln!(out, "{}<file id=\"file-{}\">", indent, id);
        let _ = writeln!(out, "{}<name>{}</name>", inner, escape_xml(&file_name(path)));
        let _ = writeln!(out, "{}<pathurl>{}</pathurl>", inner, escape_xml(&file_uri(path)));
        out.push_str(&self.rate(&inner));
        let _ = writeln!(out, "{}<duration>{}</duration>", inner, duration);
        let _ = writeln!(out, "{}<media>", inner);
        let _ = writeln!(out, "{}  <video>", inner);
        let _ = writeln!(out, "{}    <samplecharacteristics>", inner);
        out.push_str(&self.rate(&format!("{}      ", inner)));
        let _ = writeln!(out, "{}      <width>{}</width>", inner, self.width);
        let _ = writeln!(out, "{}      <height>{}</height>", inner, self.height);
        let _ = writeln!(out, "{}    </samplecharacteristics>", inner);
        let _ = writeln!(out, "{}  </video>", inner);
        let _ = writeln!(out, "{}  <audio>", inner);
        let _ = writeln!(out, "{}    <samplecharacteristics>", inner);
        let _ = writeln!(out, "{}      <depth>16</depth>", inner);
        let _ = writeln!(out, "{}      <samplerate>48000</samplerate>", inner);
        let _ = writeln!(out, "{}    </samplecharacteristics>", inner);
        let _ = writeln!(out, "{}    <channelcount>2</channelcount>", inner);
        let _ = writeln!(out, "{}  </audio>", inner);
        let _ = writeln!(out, "{}</media>", inner);
        let _ = writeln!(out, "{}</file>", indent);
    }

    fn write_track(
        &self,
        out: &mut String,
        document: &TimelineDocument<'_>,
        clips: &[FrameClip],
        media_type: &str,
        defined: &mut BTreeSet<usize>,
    ) {
        let indent = "          ";
        let inner = format!("{}  ", indent);
        let _ = writeln!(out, "        <track>");
        for (i, clip) in clips.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}<clipitem id=\"{}clip-{}\">",
                indent,
                media_type,
                i + 1
            );
            let _ = writeln!(
                out,
                "{}<name>{}</name>",
                inner,
                escape_xml(&file_stem_or_name(document, clip.source_index))
            );
            let _ = writeln!(out, "{}<enabled>TRUE</enabled>", inner);
            let _ = writeln!(out, "{}<duration>{}</duration>", inner, clip.end - clip.start);
            out.push_str(&self.rate(&inner));
            let _ = writeln!(out, "{}<start>{}</start>", inner, clip.start);
            let _ = writeln!(out, "{}<end>{}</end>", inner, clip.end);
            let _ = writeln!(out, "{}<in>{}</in>", inner, clip.source_in);
            let _ = writeln!(out, "{}<out>{}</out>", inner, clip.source_out);
            self.write_file(out, document, clips, clip.source_index, defined, &inner);
            let _ = writeln!(out, "{}<sourcetrack>", inner);
            let _ = writeln!(out, "{}  <mediatype>{}</mediatype>", inner, media_type);
            let _ = writeln!(out, "{}  <trackindex>1</trackindex>", inner);
            let _ = writeln!(out, "{}</sourcetrack>", inner);
            let _ = writeln!(out, "{}</clipitem>", indent);
        }
        let _ = writeln!(out, "        </track>");
    }
}

impl DocumentEncoder for XmemlEncoder {
    fn encode(&self, document: &TimelineDocument<'_>) -> Result<String, DomainError> {
        let clips = self.frame_clips(document);
        if clips.is_empty() {
            return Err(DomainError::NoValidSegments);
        }
        let total = clips.last().map(|clip| clip.end).unwrap_or(0);
        let name = escape_xml(document.sequence_name);
        let mut defined = BTreeSet::new();

        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<!DOCTYPE xmeml>\n");
        out.push_str("<xmeml version=\"4\">\n");
        out.push_str("  <sequence id=\"sequence-1\">\n");
        let _ = writeln!(out, "    <name>{}</name>", name);
        let _ = writeln!(out, "    <duration>{}</duration>", total);
        out.push_str(&self.rate("    "));
        out.push_str("    <media>\n");
        out.push_str("      <video>\n");
        out.push_str("        <format>\n");
        out.push_str("          <samplecharacteristics>\n");
        out.push_str(&self.rate("            "));
        let _ = writeln!(out, "            <width>{}</width>", self.width);
        let _ = writeln!(out, "            <height>{}</height>", self.height);
        out.push_str("            <pixelaspectratio>square</pixelaspectratio>\n");
        out.push_str("            <fielddominance>none</fielddominance>\n");
        out.push_str("          </samplecharacteristics>\n");
        out.push_str("        </format>\n");
        self.write_track(&mut out, document, &clips, "video", &mut defined);
        out.push_str("      </video>\n");
        out.push_str("      <audio>\n");
        self.write_track(&mut out, document, &clips, "audio", &mut defined);
        out.push_str("      </audio>\n");
        out.push_str("    </media>\n");
        out.push_str("  </sequence>\n");
        out.push_str("</xmeml>\n");
        Ok(out)
    }
}

fn file_stem_or_name(document: &TimelineDocument<'_>, source_index: usize) -> String {
    if let Some(name) = document.clip_names.get(&source_index) {
        return name.clone();
    }
    document
        .source_paths
        .get(source_index)
        .map(|path| file_stem(path))
        .unwrap_or_default()
}

/// Escape the five XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// `file://` URI for a filesystem path.
///
/// Backslashes become `/`, and a leading Windows drive (`C:`) is kept as is.
pub fn file_uri(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let (drive, rest) = split_drive(&normalized);
    let mut uri = String::from("file://");
    if !normalized.starts_with('/') {
        uri.push('/');
    }
    uri.push_str(drive);
    uri.extend(utf8_percent_encode(rest, PATH_ESCAPE));
    uri
}

fn split_drive(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        path.split_at(2)
    } else {
        ("", path)
    }
}
