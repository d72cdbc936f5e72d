//! File-based options discovery for CLI use
//!
//! Library users should build [`Options`] directly or call
//! [`Options::from_value`].

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::manifest::MANIFEST_FILE;
use crate::options::Options;

pub const TOML_FILE: &str = "bundlecfg.toml";
pub const JSON_FILE: &str = "bundlecfg.json";
/// `package.json` field holding inline options
pub const MANIFEST_FIELD: &str = "bundlecfg";

/// Searches a project directory for an options file.
///
/// # Example
///
/// ```no_run
/// use bundlecfg_config::OptionsDiscovery;
///
/// let options = OptionsDiscovery::new(".").load().unwrap();
/// ```
pub struct OptionsDiscovery {
    root: PathBuf,
}

impl OptionsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find an options file in the root directory
    ///
    /// Searches in this order:
    /// 1. bundlecfg.toml
    /// 2. bundlecfg.json
    /// 3. package.json (bundlecfg field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in [TOML_FILE, JSON_FILE] {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join(MANIFEST_FILE);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(MANIFEST_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load options from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no options file is found.
    pub fn load(&self) -> Result<Options> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_file(&path)
    }

    /// Load as a raw JSON value, for layering with other sources.
    pub fn load_value(&self) -> Result<Option<Value>> {
        match self.find() {
            Some(path) => load_value(&path).map(Some),
            None => Ok(None),
        }
    }
}

/// Load options from an explicit file path.
pub fn load_file(path: &Path) -> Result<Options> {
    let value = load_value(path)?;
    tracing::debug!(path = %path.display(), "loaded options file");
    Options::from_value(value)
}

/// Read an options file into a JSON value, whatever its format.
pub fn load_value(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(ConfigError::NotFound);
    }
    let content = fs::read_to_string(path)?;

    if path.file_name() == Some(OsStr::new(MANIFEST_FILE)) {
        return options_from_manifest(&content);
    }

    match path.extension().and_then(OsStr::to_str) {
        Some("toml") => {
            let toml_val: toml::Value =
                toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "toml".to_string(),
                    hint: Some(format!("Invalid TOML syntax: {e}")),
                })?;
            serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("TOML to JSON conversion failed: {e}")),
            })
        }
        Some("json") => serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "json".to_string(),
            hint: Some(format!("Invalid JSON: {e}")),
        }),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

fn options_from_manifest(content: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(content).map_err(|e| ConfigError::InvalidValue {
        field: MANIFEST_FILE.to_string(),
        hint: Some(format!("Invalid JSON: {e}")),
    })?;

    match parsed.get(MANIFEST_FIELD) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ => Err(ConfigError::InvalidValue {
            field: MANIFEST_FIELD.to_string(),
            hint: Some(format!(
                "Add a '{MANIFEST_FIELD}' field to your package.json"
            )),
        }),
    }
}
