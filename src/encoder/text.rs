//! Readable plain-text script summary

use std::fmt::Write as _;

use crate::domain::errors::DomainError;
use crate::encoder::{DocumentEncoder, TimelineDocument};

/// Encoder for a human-readable summary of the exported script
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextEncoder;

impl DocumentEncoder for TextEncoder {
    fn encode(&self, document: &TimelineDocument<'_>) -> Result<String, DomainError> {
        let script = document.script;
        let title = if script.title.is_empty() {
            "Untitled"
        } else {
            script.title.as_str()
        };
        let prompt = if script.user_prompt.is_empty() {
            "None"
        } else {
            script.user_prompt.as_str()
        };

        let mut out = String::new();
        out.push_str("Smart Edit Generated Script\n");
        let _ = writeln!(out, "{}\n", "=".repeat(50));
        let _ = writeln!(out, "Title: {}", title);
        let _ = writeln!(out, "Sequence: {}", document.sequence_name);
        let _ = writeln!(out, "Target Duration: {} minutes", script.target_duration_minutes);
        let _ = writeln!(
            out,
            "Estimated Duration: {:.1} minutes",
            script.estimated_duration_seconds / 60.0
        );
        let _ = writeln!(out, "Timeline Duration: {:.2}s", document.duration());
        let _ = writeln!(out, "Origin: {}", script.origin);
        let _ = writeln!(out, "User Prompt: {}\n", prompt);

        if !script.full_text.is_empty() {
            out.push_str("Generated Script:\n");
            let _ = writeln!(out, "{}", "-".repeat(20));
            out.push_str(&script.full_text);
            out.push_str("\n\n");
        }

        out.push_str("Timeline Segments:\n");
        let _ = writeln!(out, "{}", "-".repeat(20));
        // Every kept segment as written, whatever the timeline selection dropped
        for segment in script.segments.iter().filter(|segment| segment.keep) {
            let _ = writeln!(
                out,
                "{:.2}s - {:.2}s [Video {}]: {}",
                segment.start_time,
                segment.end_time,
                segment.source_index + 1,
                segment.content
            );
        }
        Ok(out)
    }
}
