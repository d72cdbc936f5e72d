//! Error types for manifest loading, options parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Manifest errors
    #[error("package manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("invalid package manifest at {}: {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    #[error("package manifest is missing required field '{field}'")]
    MissingManifestField { field: String },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    // Options file errors
    #[error("options file not found")]
    NotFound,

    #[error("unsupported options format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("no build targets specified")]
    NoTargets,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
