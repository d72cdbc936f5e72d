//! Build-descriptor generation for JavaScript/TypeScript libraries.
//!
//! Given a set of [`Options`] and a [`BuildContext`] (project directory,
//! runtime mode and `package.json`), [`configure`] produces one
//! [`BuildDescriptor`] per requested variant: `cjs`, `esm` or `umd`.
//! Descriptors serialize to the configuration shape a Rollup-style bundler
//! expects.

pub mod context;
pub mod descriptor;
pub mod discovery;
pub mod dispatch;
pub mod error;
pub mod manifest;
pub mod normalize;
pub mod options;
pub mod plugin;
pub mod validation;
pub mod variant;

pub use context::{BuildContext, RuntimeMode};
pub use descriptor::{BuildDescriptor, Configured, OutputOptions};
pub use dispatch::{configure, plan, FALLBACK_VARIANTS};
pub use error::*;
pub use manifest::Manifest;
pub use normalize::{camel_case, normalize, AliasEntry, NormalizedOptions, OutputPaths};
pub use options::{AliasPrecedence, Options, Target};
pub use plugin::{BabelEntry, BabelOptions, Pipeline, Plugin};
pub use variant::{
    CjsBuilder, EsmBuilder, OverrideFn, UmdBuilder, Variant, VariantBuilder, VariantTraits,
};

pub use discovery::{load_file, OptionsDiscovery};
pub use validation::{validate_fs, validate_schema, FsValidator, OptionsValidator, SchemaValidator};
