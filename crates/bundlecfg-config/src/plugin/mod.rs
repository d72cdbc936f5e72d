//! Plugin invocations as they appear in a build descriptor.
//!
//! Each [`Plugin`] names an npm package and carries the options object it is
//! called with. Serialization yields `{"name": ..., "options": ...}`, with
//! `options` omitted for plugins called without arguments.

mod babel;
mod pipeline;

use std::path::PathBuf;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::normalize::AliasEntry;

pub use babel::{BabelEntry, BabelOptions, BabelProfile};
pub use pipeline::Pipeline;

/// Extensions the resolver and babel try, in order.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".es6", ".es", ".mjs", ".js", ".jsx", ".json",
];

/// Package fields the node resolver consults, in order.
pub const MAIN_FIELDS: &[&str] = &["module", "jsnext:main", "main"];

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearOptions {
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResolveOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_fields: Option<Vec<String>>,
    pub extensions: Vec<String>,
}

impl NodeResolveOptions {
    /// Resolver used for bare module specifiers.
    pub fn modules() -> Self {
        Self {
            main_fields: Some(strings(MAIN_FIELDS)),
            extensions: strings(DEFAULT_EXTENSIONS),
        }
    }

    /// Resolver used behind the alias plugin: code and style extensions.
    pub fn with_styles(style_extensions: &[&str]) -> Self {
        let mut extensions = strings(DEFAULT_EXTENSIONS);
        extensions.extend(strings(style_extensions));
        Self {
            main_fields: None,
            extensions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonJsOptions {
    pub include: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlOptions {
    pub file_name: String,
    pub source_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasOptions {
    pub entries: Vec<AliasEntry>,
    pub custom_resolver: Box<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScriptOptions {
    pub use_tsconfig_declaration_dir: bool,
    pub object_hash_ignore_unknown_hack: bool,
}

impl Default for TypeScriptOptions {
    fn default() -> Self {
        Self {
            use_tsconfig_declaration_dir: true,
            object_hash_ignore_unknown_hack: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoprefixerOptions {
    pub remove: bool,
    pub flexbox: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCssOptions {
    pub extract: bool,
    pub inject: bool,
    pub minimize: bool,
    pub auto_modules: bool,
    pub source_map: bool,
    pub exec: bool,
    pub extensions: Vec<String>,
    pub plugins: Vec<PostCssPlugin>,
}

impl PostCssOptions {
    /// Inline, minified styles with vendor prefixing; nothing is extracted.
    pub fn inline(style_extensions: &[&str]) -> Self {
        Self {
            extract: false,
            inject: true,
            minimize: true,
            auto_modules: true,
            source_map: true,
            exec: true,
            extensions: strings(style_extensions),
            plugins: vec![PostCssPlugin::Autoprefixer(AutoprefixerOptions {
                remove: false,
                flexbox: "no-2009".to_string(),
            })],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "options")]
pub enum PostCssPlugin {
    #[serde(rename = "autoprefixer")]
    Autoprefixer(AutoprefixerOptions),
}

/// A configured plugin invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Plugin {
    Clear(ClearOptions),
    PeerDepsExternal,
    NodeGlobals,
    NodeBuiltins,
    NodeResolve(NodeResolveOptions),
    LocalResolve,
    SourceMaps,
    CommonJs(CommonJsOptions),
    Json,
    Image,
    Svgr,
    Url(UrlOptions),
    Alias(AliasOptions),
    TypeScript(TypeScriptOptions),
    Babel(BabelOptions),
    Terser,
    PostCss(PostCssOptions),
    Eslint(Value),
    Replace(Value),
    Filesize,
}

impl Plugin {
    /// npm package providing the plugin.
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::Clear(_) => "rollup-plugin-clear",
            Plugin::PeerDepsExternal => "rollup-plugin-peer-deps-external",
            Plugin::NodeGlobals => "rollup-plugin-node-globals",
            Plugin::NodeBuiltins => "rollup-plugin-node-builtins",
            Plugin::NodeResolve(_) => "@rollup/plugin-node-resolve",
            Plugin::LocalResolve => "rollup-plugin-local-resolve",
            Plugin::SourceMaps => "rollup-plugin-sourcemaps",
            Plugin::CommonJs(_) => "rollup-plugin-commonjs",
            Plugin::Json => "rollup-plugin-json",
            Plugin::Image => "@rollup/plugin-image",
            Plugin::Svgr => "@svgr/rollup",
            Plugin::Url(_) => "rollup-plugin-url",
            Plugin::Alias(_) => "@rollup/plugin-alias",
            Plugin::TypeScript(_) => "rollup-plugin-typescript2",
            Plugin::Babel(_) => "rollup-plugin-babel",
            Plugin::Terser => "rollup-plugin-terser",
            Plugin::PostCss(_) => "rollup-plugin-postcss",
            Plugin::Eslint(_) => "rollup-plugin-eslint",
            Plugin::Replace(_) => "rollup-plugin-replace",
            Plugin::Filesize => "rollup-plugin-filesize",
        }
    }

    pub fn clear_dist() -> Self {
        Plugin::Clear(ClearOptions {
            targets: vec!["dist".to_string()],
        })
    }

    /// Rewrite CommonJS modules from `node_modules` into ES modules.
    pub fn commonjs() -> Self {
        Plugin::CommonJs(CommonJsOptions {
            include: strings(&["node_modules/", "node_modules/**", "node_modules/**/*"]),
        })
    }

    /// Emit static assets under a content-hashed name.
    pub fn url(project_dir: impl Into<PathBuf>) -> Self {
        Plugin::Url(UrlOptions {
            file_name: "[dirname][hash:8][extname]".to_string(),
            source_dir: project_dir.into(),
        })
    }

    pub fn alias(entries: Vec<AliasEntry>, style_extensions: &[&str]) -> Self {
        Plugin::Alias(AliasOptions {
            entries,
            custom_resolver: Box::new(Plugin::NodeResolve(NodeResolveOptions::with_styles(
                style_extensions,
            ))),
        })
    }
}

impl Serialize for Plugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.name())?;
        match self {
            Plugin::Clear(options) => map.serialize_entry("options", options)?,
            Plugin::NodeResolve(options) => map.serialize_entry("options", options)?,
            Plugin::CommonJs(options) => map.serialize_entry("options", options)?,
            Plugin::Url(options) => map.serialize_entry("options", options)?,
            Plugin::Alias(options) => map.serialize_entry("options", options)?,
            Plugin::TypeScript(options) => map.serialize_entry("options", options)?,
            Plugin::Babel(options) => map.serialize_entry("options", options)?,
            Plugin::PostCss(options) => map.serialize_entry("options", options)?,
            Plugin::Eslint(options) | Plugin::Replace(options) => {
                map.serialize_entry("options", options)?
            }
            Plugin::PeerDepsExternal
            | Plugin::NodeGlobals
            | Plugin::NodeBuiltins
            | Plugin::LocalResolve
            | Plugin::SourceMaps
            | Plugin::Json
            | Plugin::Image
            | Plugin::Svgr
            | Plugin::Terser
            | Plugin::Filesize => {}
        }
        map.end()
    }
}
