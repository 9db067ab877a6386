//! Error handling module for SmartEdit export

use thiserror::Error;

/// Main error type for parsing and setup outside the export domain
#[derive(Error, Debug)]
pub enum SmartEditError {
    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    LoggingInit { message: String },

    /// Configuration file parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON script parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML script parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for SmartEdit operations
pub type SmartEditResult<T> = std::result::Result<T, SmartEditError>;
