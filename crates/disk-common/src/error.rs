//! Error types for disk-projection crates.
//!
//! Per-pixel singularities (disk center, edge-on inclination, cells beyond the
//! radius cutoff) are reported as NaN/infinite values in the output, never as
//! errors. `DiskError` covers contract violations and the I/O boundary.

use thiserror::Error;

/// Result type alias using DiskError.
pub type DiskResult<T> = Result<T, DiskError>;

/// Primary error type for disk-projection operations.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("Invalid argument '{param}': {message}")]
    InvalidArgument { param: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("FITS encoding error: {0}")]
    Fits(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl DiskError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Fits error.
    pub fn fits(msg: impl Into<String>) -> Self {
        Self::Fits(msg.into())
    }

    /// Short machine-readable kind, used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DiskError::InvalidArgument { .. } => "InvalidArgument",
            DiskError::Config(_) => "Config",
            DiskError::Fits(_) => "Fits",
            DiskError::Io(_) => "Io",
            DiskError::Yaml(_) => "Yaml",
            DiskError::Json(_) => "Json",
        }
    }
}

impl From<std::io::Error> for DiskError {
    fn from(err: std::io::Error) -> Self {
        DiskError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for DiskError {
    fn from(err: serde_yaml::Error) -> Self {
        DiskError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for DiskError {
    fn from(err: serde_json::Error) -> Self {
        DiskError::Json(err.to_string())
    }
}
