//! Variant builders.
//!
//! The three builders share one pipeline skeleton and differ only in their
//! [`VariantTraits`] and output descriptor. Builders hold no state: the same
//! normalized options always produce the same descriptor.

mod cjs;
mod esm;
mod umd;

use std::fmt;

use serde::Serialize;

use crate::descriptor::{BuildDescriptor, OutputOptions};
use crate::normalize::NormalizedOptions;
use crate::plugin::{
    BabelOptions, BabelProfile, NodeResolveOptions, Pipeline, Plugin, PostCssOptions,
    TypeScriptOptions,
};

pub use cjs::CjsBuilder;
pub use esm::EsmBuilder;
pub use umd::UmdBuilder;

/// Caller-supplied transformation applied to each finished descriptor.
pub type OverrideFn<'a> = &'a dyn Fn(BuildDescriptor) -> BuildDescriptor;

pub const STYLE_EXTENSIONS: &[&str] = &[".less", ".scss", ".css"];
pub const UMD_STYLE_EXTENSIONS: &[&str] = &[".less", ".scss", ".css", ".sass"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Cjs,
    Esm,
    Umd,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Cjs => "cjs",
            Variant::Esm => "esm",
            Variant::Umd => "umd",
        }
    }

    pub fn builder(self) -> &'static dyn VariantBuilder {
        match self {
            Variant::Cjs => &CjsBuilder,
            Variant::Esm => &EsmBuilder,
            Variant::Umd => &UmdBuilder,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What sets one variant's pipeline apart from the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantTraits {
    /// Import images and SVGs as modules
    pub asset_modules: bool,
    pub style_extensions: &'static [&'static str],
    pub babel: BabelProfile,
    /// Minify regardless of the `minify` option
    pub always_minify: bool,
    /// Inline stylesheets through postcss
    pub inline_styles: bool,
}

pub trait VariantBuilder: Send + Sync {
    fn variant(&self) -> Variant;

    fn traits(&self) -> VariantTraits;

    fn output(&self, options: &NormalizedOptions) -> OutputOptions;

    /// Build the descriptor, then hand it to `overrides` if one is given.
    fn build(
        &self,
        options: &NormalizedOptions,
        overrides: Option<OverrideFn<'_>>,
    ) -> BuildDescriptor {
        let descriptor = BuildDescriptor {
            input: options.input.clone(),
            output: self.output(options),
            external: options.external.clone(),
            plugins: pipeline(self.traits(), options),
        };

        tracing::debug!(
            variant = %self.variant(),
            file = %descriptor.output.file.display(),
            plugins = descriptor.plugins.len(),
            "built descriptor"
        );

        match overrides {
            Some(apply) => apply(descriptor),
            None => descriptor,
        }
    }
}

/// Shared output fields: source maps on, export name from the manifest.
pub(crate) fn base_output(
    options: &NormalizedOptions,
    variant: Variant,
    file: &std::path::Path,
) -> OutputOptions {
    OutputOptions {
        file: file.to_path_buf(),
        format: variant,
        name: options.export_name.clone(),
        sourcemap: true,
        globals: None,
    }
}

/// The ordered plugin pipeline for one variant.
pub fn pipeline(traits: VariantTraits, options: &NormalizedOptions) -> Vec<Plugin> {
    Pipeline::new()
        .push(Plugin::clear_dist())
        .push(Plugin::PeerDepsExternal)
        .push(Plugin::NodeGlobals)
        .push(Plugin::NodeBuiltins)
        .push(Plugin::NodeResolve(NodeResolveOptions::modules()))
        .push(Plugin::LocalResolve)
        .push(Plugin::SourceMaps)
        .push(Plugin::commonjs())
        .push(Plugin::Json)
        .push_if(traits.asset_modules, || Plugin::Image)
        .push_if(traits.asset_modules, || Plugin::Svgr)
        .push(Plugin::url(&options.project_dir))
        .push(Plugin::alias(options.aliases.clone(), traits.style_extensions))
        .push_if(options.is_typescript, || {
            Plugin::TypeScript(TypeScriptOptions::default())
        })
        .push(Plugin::Babel(BabelOptions::new(traits.babel, options)))
        .push_if(traits.always_minify || options.minify, || Plugin::Terser)
        .push_if(traits.inline_styles, || {
            Plugin::PostCss(PostCssOptions::inline(traits.style_extensions))
        })
        .push(Plugin::Eslint(options.eslint.clone()))
        .push_some(options.replace.clone().map(Plugin::Replace))
        .push_if(options.filesize, || Plugin::Filesize)
        .build()
}
