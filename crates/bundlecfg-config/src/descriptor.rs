//! Build descriptors handed to the bundling engine.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::plugin::Plugin;
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputOptions {
    pub file: PathBuf,
    pub format: Variant,
    /// Export name (and global name for umd)
    pub name: String,
    pub sourcemap: bool,
    /// Module → global mapping, umd only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<IndexMap<String, String>>,
}

/// Complete configuration for one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildDescriptor {
    pub input: PathBuf,
    pub output: OutputOptions,
    pub external: Vec<String>,
    pub plugins: Vec<Plugin>,
}

impl BuildDescriptor {
    pub fn variant(&self) -> Variant {
        self.output.format
    }

    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.name() == name)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugin(name).is_some()
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// Dispatcher result.
///
/// A request that yields exactly one descriptor returns it bare; anything
/// else returns a list. The shape carries over to JSON (object vs array).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Configured {
    Single(BuildDescriptor),
    Many(Vec<BuildDescriptor>),
}

impl Configured {
    pub fn from_vec(mut descriptors: Vec<BuildDescriptor>) -> Self {
        if descriptors.len() == 1 {
            if let Some(only) = descriptors.pop() {
                return Configured::Single(only);
            }
        }
        Configured::Many(descriptors)
    }

    /// Number of descriptors, whichever shape they are in.
    pub fn count(&self) -> usize {
        match self {
            Configured::Single(_) => 1,
            Configured::Many(all) => all.len(),
        }
    }

    pub fn as_single(&self) -> Option<&BuildDescriptor> {
        match self {
            Configured::Single(descriptor) => Some(descriptor),
            Configured::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<BuildDescriptor> {
        match self {
            Configured::Single(descriptor) => vec![descriptor],
            Configured::Many(all) => all,
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
