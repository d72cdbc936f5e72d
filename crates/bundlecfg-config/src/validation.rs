//! Pluggable options validation strategies
//!
//! Separates schema validation (pure, used before every build) from
//! filesystem validation (used by the CLI's `check` command).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::manifest::MANIFEST_FILE;
use crate::options::Options;

/// Trait for pluggable validation strategies
pub trait OptionsValidator {
    fn validate(&self, options: &Options) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use bundlecfg_config::{Options, OptionsValidator, SchemaValidator};
///
/// SchemaValidator.validate(&Options::new(["esm"])).unwrap();
/// assert!(SchemaValidator.validate(&Options::default()).is_err());
/// ```
pub struct SchemaValidator;

impl OptionsValidator for SchemaValidator {
    fn validate(&self, options: &Options) -> Result<()> {
        if options.target.is_empty() {
            return Err(ConfigError::NoTargets);
        }

        if options.external.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "external module names cannot be empty".to_string(),
                hint: Some("Remove empty strings from the 'external' array".to_string()),
            });
        }

        if options.alias.keys().any(|find| find.is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "alias keys cannot be empty".to_string(),
                hint: Some("An empty alias would match every import".to_string()),
            });
        }

        for (module, global) in &options.globals {
            if module.trim().is_empty() || global.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("invalid globals entry '{module}' → '{global}'"),
                    hint: Some("Both the module name and the global name are required".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the manifest and an explicit
/// entry point exist under the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl OptionsValidator for FsValidator {
    fn validate(&self, options: &Options) -> Result<()> {
        SchemaValidator.validate(options)?;

        let manifest = self.root.join(MANIFEST_FILE);
        if !manifest.is_file() {
            return Err(ConfigError::ManifestNotFound { path: manifest });
        }

        if let Some(input) = &options.input {
            let path = self.root.join(input);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(options: &Options) -> Result<()> {
    SchemaValidator.validate(options)
}

/// Convenience function for filesystem validation
pub fn validate_fs(options: &Options, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(options)
}
