//! Command-line argument definitions

use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Generated script file (JSON or YAML)
    #[arg(short, long)]
    pub script: String,

    /// Source video paths, in source index order
    #[arg(long = "source", required = true, num_args = 1..)]
    pub sources: Vec<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: String,

    /// Document format (edl, xml, text, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// EDL dialect (standard, cmx3600)
    #[arg(long)]
    pub dialect: Option<String>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Sequence name written as the document title
    #[arg(long)]
    pub sequence_name: Option<String>,

    /// Display name for a source, as INDEX=NAME
    #[arg(long = "clip-name", value_parser = parse_clip_name)]
    pub clip_names: Vec<(usize, String)>,

    /// Minimum segment duration in seconds (default: one frame)
    #[arg(long = "min-duration")]
    pub min_duration: Option<f64>,

    /// Frame width for XML output
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height for XML output
    #[arg(long)]
    pub height: Option<u32>,

    /// Configuration file (default: smartedit.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Arguments for the timecode command
#[derive(Args, Debug, Clone)]
pub struct TimecodeArgs {
    /// Position in seconds
    #[arg(allow_negative_numbers = true)]
    pub seconds: f64,

    /// Frames per second
    #[arg(long, default_value = "24")]
    pub fps: u32,
}

/// Arguments for the reel command
#[derive(Args, Debug, Clone)]
pub struct ReelArgs {
    /// Source file name or path
    pub name: String,

    /// EDL dialect (standard, cmx3600)
    #[arg(long, default_value = "standard")]
    pub dialect: String,
}

/// Parse an `INDEX=NAME` clip name override
pub fn parse_clip_name(value: &str) -> Result<(usize, String), String> {
    let (index, name) = value
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=NAME, got '{}'", value))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid source index '{}': {}", index, e))?;
    if name.is_empty() {
        return Err("clip name cannot be empty".to_string());
    }
    Ok((index, name.to_string()))
}
