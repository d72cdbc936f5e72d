//! Read-only view of the project's `package.json`.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

pub const MANIFEST_FILE: &str = "package.json";

/// A `null` dependency table reads as an empty one.
fn null_as_empty<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The subset of `package.json` that drives descriptor generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: IndexMap<String, Value>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub peer_dependencies: IndexMap<String, Value>,

    /// Non-standard field some projects use to declare their source entry
    #[serde(default)]
    pub entry: Option<String>,

    #[serde(default)]
    pub main: Option<String>,

    #[serde(default)]
    pub module: Option<String>,

    /// Either a path or an object of module substitutions
    #[serde(default)]
    pub browser: Option<Value>,
}

impl Manifest {
    /// Load `package.json` from a project directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ManifestNotFound` when the file is absent and
    /// `ConfigError::InvalidManifest` when it cannot be parsed.
    pub fn load(project_dir: impl AsRef<Path>) -> Result<Self> {
        let path = project_dir.as_ref().join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(ConfigError::ManifestNotFound { path });
        }

        let content = fs::read_to_string(&path)?;
        let manifest = Self::from_json(&content).map_err(|err| match err {
            ConfigError::InvalidValue { hint, .. } => ConfigError::InvalidManifest {
                path: path.clone(),
                message: hint.unwrap_or_default(),
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            dependencies = manifest.dependencies.len(),
            peer_dependencies = manifest.peer_dependencies.len(),
            "loaded package manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: MANIFEST_FILE.to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Package name, required for the export name.
    pub fn package_name(&self) -> Result<&str> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ConfigError::MissingManifestField {
                field: "name".to_string(),
            }),
        }
    }

    /// The `browser` field when it is a plain path.
    pub fn browser_file(&self) -> Option<&str> {
        self.browser.as_ref().and_then(Value::as_str)
    }

    /// Names of runtime and peer dependencies, runtime first.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.peer_dependencies.keys())
            .map(String::as_str)
    }
}
