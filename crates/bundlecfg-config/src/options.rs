//! User-facing build request.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

fn default_true() -> bool {
    true
}

/// Accept `"umd"` as shorthand for `["umd"]`.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<Target>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Target),
        Many(Vec<Target>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(target) => vec![target],
        OneOrMany::Many(targets) => targets,
    })
}

/// Requested output variant.
///
/// Unrecognized names are kept rather than rejected: the dispatcher treats
/// them as a request for the default pair of variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Target {
    Cjs,
    Esm,
    Umd,
    Other(String),
}

impl Target {
    pub fn as_str(&self) -> &str {
        match self {
            Target::Cjs => "cjs",
            Target::Esm => "esm",
            Target::Umd => "umd",
            Target::Other(name) => name,
        }
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        match value {
            "cjs" => Target::Cjs,
            "esm" => Target::Esm,
            "umd" => Target::Umd,
            other => Target::Other(other.to_string()),
        }
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        Target::from(value.as_str())
    }
}

impl From<Target> for String {
    fn from(value: Target) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where user aliases sit relative to the built-in `@` alias.
///
/// Alias resolution is first-match-wins, so a user entry for `@` only takes
/// effect with [`AliasPrecedence::UserFirst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AliasPrecedence {
    #[default]
    BuiltinFirst,
    UserFirst,
}

/// Options accepted by [`crate::configure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Variants to build, in order
    #[serde(default, deserialize_with = "one_or_many")]
    pub target: Vec<Target>,

    /// Entry point, overriding the manifest's `entry` field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Extra modules to leave out of the bundle
    #[serde(default)]
    pub external: Vec<String>,

    /// Import aliases (name → replacement path), in declaration order
    #[serde(default)]
    pub alias: IndexMap<String, String>,

    #[serde(default)]
    pub alias_precedence: AliasPrecedence,

    /// Strip TypeScript before the babel pass
    #[serde(default = "default_true")]
    pub is_typescript: bool,

    /// Minify cjs/esm output (umd is always minified)
    #[serde(default)]
    pub minify: bool,

    /// Report bundle size after the build
    #[serde(default = "default_true")]
    pub filesize: bool,

    /// Options forwarded to the lint plugin verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eslint_options: Option<Value>,

    /// Replacement rules; the replace plugin is only added when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_options: Option<Value>,

    /// Module → global variable mapping for the umd variant
    #[serde(default)]
    pub globals: IndexMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target: Vec::new(),
            input: None,
            external: Vec::new(),
            alias: IndexMap::new(),
            alias_precedence: AliasPrecedence::default(),
            is_typescript: true,
            minify: false,
            filesize: true,
            eslint_options: None,
            replace_options: None,
            globals: IndexMap::new(),
        }
    }
}

impl Options {
    /// Options requesting the given targets with every other field defaulted.
    ///
    /// # Example
    ///
    /// ```
    /// use bundlecfg_config::{Options, Target};
    ///
    /// let options = Options::new(["cjs", "umd"]).with_minify(true);
    /// assert_eq!(options.target, vec![Target::Cjs, Target::Umd]);
    /// assert!(options.minify);
    /// ```
    pub fn new<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Target>,
    {
        Self {
            target: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create from serde_json::Value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "options".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "options".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_external(mut self, name: impl Into<String>) -> Self {
        self.external.push(name.into());
        self
    }

    /// Add an import alias. Aliases keep the order they were added in.
    pub fn with_alias(mut self, find: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.alias.insert(find.into(), replacement.into());
        self
    }

    pub fn with_alias_precedence(mut self, precedence: AliasPrecedence) -> Self {
        self.alias_precedence = precedence;
        self
    }

    pub fn with_typescript(mut self, enabled: bool) -> Self {
        self.is_typescript = enabled;
        self
    }

    pub fn with_minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    pub fn with_filesize(mut self, enabled: bool) -> Self {
        self.filesize = enabled;
        self
    }

    pub fn with_eslint_options(mut self, options: Value) -> Self {
        self.eslint_options = Some(options);
        self
    }

    pub fn with_replace_options(mut self, options: Value) -> Self {
        self.replace_options = Some(options);
        self
    }

    pub fn with_global(mut self, module: impl Into<String>, global: impl Into<String>) -> Self {
        self.globals.insert(module.into(), global.into());
        self
    }
}
