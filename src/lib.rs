//! SmartEdit export library
//!
//! Turns an edited transcript script into a timeline document for a
//! non-linear editor: a CMX3600-style EDL, an xmeml interchange file or a
//! plain-text summary.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod encoder;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{ExportInteractor, ExportRequest, ExportResponse};
pub use domain::errors::DomainError;
pub use domain::model::{
    seconds_to_frames, seconds_to_timecode, EdlDialect, ExportFormat, ExportSettings,
    ExportWarning, GeneratedScript, Segment, Timecode,
};
pub use domain::rules::{cmx_reel_name, sanitize_reel_name};
pub use error::{SmartEditError, SmartEditResult};
