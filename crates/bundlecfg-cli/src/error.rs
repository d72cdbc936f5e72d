//! Error handling for the bundlecfg CLI.
//!
//! Library errors arrive as [`ConfigError`] and are wrapped in [`CliError`];
//! `main` turns the result into a miette report.

use bundlecfg_config::ConfigError;
use miette::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest, options and validation errors from the config crate
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

fn hint_for(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ManifestNotFound { .. } => {
            Some("Run inside a package directory or pass --cwd <DIR>")
        }
        ConfigError::MissingManifestField { .. } => Some("Add a \"name\" field to package.json"),
        ConfigError::InvalidValue { .. } => {
            Some("Check the options file and BUNDLECFG_* environment variables")
        }
        ConfigError::NoTargets => {
            Some("Pass --target cjs|esm|umd or set \"target\" in bundlecfg.toml")
        }
        ConfigError::NotFound => Some("Create bundlecfg.toml or pass --config <FILE>"),
        ConfigError::EntryNotFound { .. } => Some("Check the \"input\" option"),
        _ => None,
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(config_err) => match hint_for(&config_err) {
            Some(hint) => miette::miette!(help = hint, "Configuration error: {}", config_err),
            None => miette::miette!("Configuration error: {}", config_err),
        },
        other => miette::miette!("{}", other),
    }
}
