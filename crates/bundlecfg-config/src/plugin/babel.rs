//! Babel transform configuration shared by every variant.

use serde::Serialize;
use serde_json::{json, Value};

use super::{strings, DEFAULT_EXTENSIONS};
use crate::normalize::NormalizedOptions;

/// A babel preset or plugin, optionally with options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BabelEntry {
    Name(String),
    WithOptions(String, Value),
}

impl BabelEntry {
    pub fn name(&self) -> &str {
        match self {
            BabelEntry::Name(name) | BabelEntry::WithOptions(name, _) => name,
        }
    }
}

fn named(name: &str) -> BabelEntry {
    BabelEntry::Name(name.to_string())
}

fn with_options(name: &str, options: Value) -> BabelEntry {
    BabelEntry::WithOptions(name.to_string(), options)
}

const JSX_PLUGINS: &[&str] = &[
    "@babel/plugin-syntax-jsx",
    "@babel/plugin-transform-react-jsx",
    "@babel/plugin-transform-react-display-name",
    "@babel/plugin-transform-react-constant-elements",
    "@babel/plugin-transform-react-jsx-compat",
];

const JSX_DEV_PLUGINS: &[&str] = &[
    "@babel/plugin-transform-react-jsx-self",
    "@babel/plugin-transform-react-jsx-source",
];

const PROPOSAL_PLUGINS: &[&str] = &[
    "@babel/plugin-proposal-object-rest-spread",
    "@babel/plugin-proposal-do-expressions",
    "@babel/plugin-proposal-export-default-from",
    "@babel/plugin-proposal-export-namespace-from",
    "@babel/plugin-proposal-nullish-coalescing-operator",
    "@babel/plugin-proposal-optional-chaining",
];

const BROWSER_TARGETS: &[&str] = &["last 2 versions", "> 0.25%", "not dead"];

/// Per-variant switches of the babel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BabelProfile {
    /// Inject helpers from `@babel/runtime` instead of inlining them
    pub runtime_helpers: bool,
    /// Add `babel-plugin-react-require` after dynamic-import syntax
    pub react_require: bool,
    /// Target browsers as well as the current node
    pub browser_targets: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BabelOptions {
    pub babelrc: bool,
    pub exclude: String,
    pub source_maps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_helpers: Option<bool>,
    pub extensions: Vec<String>,
    pub presets: Vec<BabelEntry>,
    pub plugins: Vec<BabelEntry>,
}

impl BabelOptions {
    pub fn new(profile: BabelProfile, options: &NormalizedOptions) -> Self {
        Self {
            babelrc: false,
            exclude: "node_modules/**".to_string(),
            source_maps: true,
            runtime_helpers: profile.runtime_helpers.then_some(true),
            extensions: strings(DEFAULT_EXTENSIONS),
            presets: presets(profile, options.is_typescript),
            plugins: plugins(profile, options.mode.is_development()),
        }
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|entry| entry.name() == name)
    }
}

fn presets(profile: BabelProfile, typescript: bool) -> Vec<BabelEntry> {
    let targets = if profile.browser_targets {
        json!({ "node": "current", "browsers": BROWSER_TARGETS })
    } else {
        json!({ "node": "current" })
    };

    let mut presets = vec![with_options(
        "@babel/preset-env",
        json!({
            "useBuiltIns": false,
            "modules": false,
            "loose": false,
            "debug": false,
            "targets": targets,
        }),
    )];
    if typescript {
        presets.push(named("@babel/preset-typescript"));
    }
    presets
}

fn plugins(profile: BabelProfile, development: bool) -> Vec<BabelEntry> {
    let mut plugins = Vec::with_capacity(20);

    if profile.runtime_helpers {
        plugins.push(with_options(
            "@babel/plugin-transform-runtime",
            json!({ "useESModules": true }),
        ));
    }
    plugins.push(named("@babel/plugin-syntax-dynamic-import"));
    if profile.react_require {
        plugins.push(named("babel-plugin-react-require"));
    }
    plugins.extend(JSX_PLUGINS.iter().copied().map(named));
    if development {
        plugins.extend(JSX_DEV_PLUGINS.iter().copied().map(named));
    }
    plugins.extend(PROPOSAL_PLUGINS.iter().copied().map(named));
    plugins.push(with_options(
        "@babel/plugin-proposal-decorators",
        json!({ "legacy": true }),
    ));
    plugins.push(with_options(
        "@babel/plugin-proposal-class-properties",
        json!({ "loose": true }),
    ));

    plugins
}
