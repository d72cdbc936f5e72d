//! Option normalization: fills every default from the manifest and the
//! build context so the variant builders never branch on `Option`.

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::context::{BuildContext, RuntimeMode};
use crate::error::Result;
use crate::options::{AliasPrecedence, Options};

/// Symbol of the built-in alias pointing at the project's source directory.
pub const BUILTIN_ALIAS: &str = "@";
pub const SOURCE_DIR: &str = "src";
pub const DEFAULT_INPUT: &str = "src/index.ts";
pub const DEFAULT_CJS_OUTPUT: &str = "dist/index.cjs.js";
pub const DEFAULT_ESM_OUTPUT: &str = "dist/index.esm.js";
pub const DEFAULT_UMD_OUTPUT: &str = "dist/index.umd.js";

/// One `find → replacement` pair handed to the alias plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub find: String,
    pub replacement: String,
}

impl AliasEntry {
    pub fn new(find: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replacement: replacement.into(),
        }
    }
}

/// Output file per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub cjs: PathBuf,
    pub esm: PathBuf,
    pub umd: PathBuf,
}

/// Fully resolved options.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOptions {
    pub project_dir: PathBuf,
    pub mode: RuntimeMode,
    pub input: PathBuf,
    pub outputs: OutputPaths,
    pub external: Vec<String>,
    pub aliases: Vec<AliasEntry>,
    pub export_name: String,
    pub is_typescript: bool,
    pub minify: bool,
    pub filesize: bool,
    pub eslint: Value,
    pub replace: Option<Value>,
    pub globals: IndexMap<String, String>,
}

/// Default lint configuration: check the source tree only.
pub fn default_eslint_options() -> Value {
    json!({ "include": ["src/**"] })
}

/// Resolve every optional field of `options` against the context.
///
/// # Errors
///
/// Fails when the manifest has no usable `name`.
pub fn normalize(options: &Options, ctx: &BuildContext) -> Result<NormalizedOptions> {
    let manifest = ctx.manifest();
    let export_name = camel_case(manifest.package_name()?);

    let input = options
        .input
        .clone()
        .or_else(|| manifest.entry.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| ctx.resolve(DEFAULT_INPUT));

    let outputs = OutputPaths {
        cjs: manifest
            .main
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| ctx.resolve(DEFAULT_CJS_OUTPUT)),
        esm: manifest
            .module
            .as_ref()
            .or(manifest.main.as_ref())
            .map(PathBuf::from)
            .unwrap_or_else(|| ctx.resolve(DEFAULT_ESM_OUTPUT)),
        umd: manifest
            .browser_file()
            .map(PathBuf::from)
            .unwrap_or_else(|| ctx.resolve(DEFAULT_UMD_OUTPUT)),
    };

    let external: IndexSet<&str> = manifest
        .dependency_names()
        .chain(options.external.iter().map(String::as_str))
        .collect();

    let normalized = NormalizedOptions {
        project_dir: ctx.project_dir().to_path_buf(),
        mode: ctx.mode(),
        input,
        outputs,
        external: external.into_iter().map(str::to_string).collect(),
        aliases: alias_entries(options, ctx),
        export_name,
        is_typescript: options.is_typescript,
        minify: options.minify,
        filesize: options.filesize,
        eslint: options
            .eslint_options
            .clone()
            .unwrap_or_else(default_eslint_options),
        replace: options.replace_options.clone(),
        globals: options.globals.clone(),
    };

    tracing::debug!(
        input = %normalized.input.display(),
        externals = normalized.external.len(),
        aliases = normalized.aliases.len(),
        export_name = %normalized.export_name,
        "normalized options"
    );
    Ok(normalized)
}

fn alias_entries(options: &Options, ctx: &BuildContext) -> Vec<AliasEntry> {
    let builtin = AliasEntry::new(
        BUILTIN_ALIAS,
        ctx.resolve(SOURCE_DIR).to_string_lossy().into_owned(),
    );
    let user = options
        .alias
        .iter()
        .map(|(find, replacement)| AliasEntry::new(find, replacement));

    if options.alias.contains_key(BUILTIN_ALIAS) {
        tracing::warn!(
            precedence = ?options.alias_precedence,
            "user alias '{}' shares its key with the built-in source alias",
            BUILTIN_ALIAS
        );
    }

    match options.alias_precedence {
        AliasPrecedence::BuiltinFirst => std::iter::once(builtin).chain(user).collect(),
        AliasPrecedence::UserFirst => user.chain(std::iter::once(builtin)).collect(),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
}

fn classify(c: char) -> CharClass {
    if c.is_numeric() {
        CharClass::Digit
    } else if c.is_uppercase() {
        CharClass::Upper
    } else {
        CharClass::Lower
    }
}

/// Split an identifier-ish string into words the way lodash's `words` does
/// for ASCII input: separators, case humps, acronym ends and digit runs.
fn words(input: &str) -> Vec<String> {
    let mut out = Vec::new();

    for token in input.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = token.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if i > 0 {
                let prev = classify(chars[i - 1]);
                let cur = classify(c);
                let next = chars.get(i + 1).map(|&n| classify(n));
                let boundary = match (prev, cur) {
                    (CharClass::Digit, CharClass::Digit) => false,
                    (CharClass::Digit, _) | (_, CharClass::Digit) => true,
                    (CharClass::Lower, CharClass::Upper) => true,
                    (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
                    _ => false,
                };
                if boundary && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }

        if !current.is_empty() {
            out.push(current);
        }
    }

    out
}

/// Camel-case a package name for use as an export or global name.
///
/// ```
/// use bundlecfg_config::camel_case;
///
/// assert_eq!(camel_case("my-lib"), "myLib");
/// assert_eq!(camel_case("@scope/my-lib"), "scopeMyLib");
/// ```
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (index, word) in words(input).iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use serde_json::json;

    fn ctx(manifest: Value) -> BuildContext {
        BuildContext::new("/proj", serde_json::from_value::<Manifest>(manifest).unwrap())
    }

    #[test]
    fn camel_case_matches_lodash() {
        assert_eq!(camel_case("my-lib"), "myLib");
        assert_eq!(camel_case("@scope/my-lib"), "scopeMyLib");
        assert_eq!(camel_case("foo_bar"), "fooBar");
        assert_eq!(camel_case("FOO_BAR"), "fooBar");
        assert_eq!(camel_case("fooBar"), "fooBar");
        assert_eq!(camel_case("XMLHttpRequest"), "xmlHttpRequest");
        assert_eq!(camel_case("foo2bar"), "foo2Bar");
        assert_eq!(camel_case("react-dom-16"), "reactDom16");
        assert_eq!(camel_case("--"), "");
    }

    #[test]
    fn input_precedence() {
        let options = Options::new(["cjs"]);
        let plain = normalize(&options, &ctx(json!({"name": "a"}))).unwrap();
        assert_eq!(plain.input, PathBuf::from("/proj/src/index.ts"));

        let from_manifest =
            normalize(&options, &ctx(json!({"name": "a", "entry": "lib/main.tsx"}))).unwrap();
        assert_eq!(from_manifest.input, PathBuf::from("lib/main.tsx"));

        let explicit = normalize(
            &options.clone().with_input("app.ts"),
            &ctx(json!({"name": "a", "entry": "lib/main.tsx"})),
        )
        .unwrap();
        assert_eq!(explicit.input, PathBuf::from("app.ts"));
    }

    #[test]
    fn output_defaults() {
        let options = Options::new(["cjs"]);
        let bare = normalize(&options, &ctx(json!({"name": "a"}))).unwrap();
        assert_eq!(bare.outputs.cjs, PathBuf::from("/proj/dist/index.cjs.js"));
        assert_eq!(bare.outputs.esm, PathBuf::from("/proj/dist/index.esm.js"));
        assert_eq!(bare.outputs.umd, PathBuf::from("/proj/dist/index.umd.js"));

        let with_main =
            normalize(&options, &ctx(json!({"name": "a", "main": "lib/a.js"}))).unwrap();
        assert_eq!(with_main.outputs.cjs, PathBuf::from("lib/a.js"));
        assert_eq!(with_main.outputs.esm, PathBuf::from("lib/a.js"));

        let full = normalize(
            &options,
            &ctx(json!({
                "name": "a",
                "main": "lib/a.js",
                "module": "es/a.js",
                "browser": "umd/a.js"
            })),
        )
        .unwrap();
        assert_eq!(full.outputs.esm, PathBuf::from("es/a.js"));
        assert_eq!(full.outputs.umd, PathBuf::from("umd/a.js"));
    }

    #[test]
    fn externals_are_deduplicated_in_first_seen_order() {
        let options = Options::new(["esm"])
            .with_external("path")
            .with_external("react");
        let normalized = normalize(
            &options,
            &ctx(json!({
                "name": "a",
                "dependencies": {"react": "*", "lodash": "*"},
                "peerDependencies": {"react": "*", "react-dom": "*"}
            })),
        )
        .unwrap();
        assert_eq!(
            normalized.external,
            vec!["react", "lodash", "react-dom", "path"]
        );
    }

    #[test]
    fn builtin_alias_comes_first() {
        let options = Options::new(["cjs"]).with_alias("~", "/proj/lib");
        let normalized = normalize(&options, &ctx(json!({"name": "a"}))).unwrap();
        assert_eq!(
            normalized.aliases,
            vec![
                AliasEntry::new("@", "/proj/src"),
                AliasEntry::new("~", "/proj/lib"),
            ]
        );
    }

    #[test]
    fn duplicate_builtin_alias_is_appended_not_replaced() {
        let options = Options::new(["cjs"]).with_alias("@", "/elsewhere");
        let normalized = normalize(&options, &ctx(json!({"name": "a"}))).unwrap();
        assert_eq!(
            normalized.aliases,
            vec![
                AliasEntry::new("@", "/proj/src"),
                AliasEntry::new("@", "/elsewhere"),
            ]
        );
    }

    #[test]
    fn user_first_precedence_moves_user_aliases_ahead() {
        let options = Options::new(["cjs"])
            .with_alias("@", "/elsewhere")
            .with_alias_precedence(AliasPrecedence::UserFirst);
        let normalized = normalize(&options, &ctx(json!({"name": "a"}))).unwrap();
        assert_eq!(
            normalized.aliases,
            vec![
                AliasEntry::new("@", "/elsewhere"),
                AliasEntry::new("@", "/proj/src"),
            ]
        );
    }

    #[test]
    fn eslint_defaults_to_source_tree() {
        let normalized = normalize(&Options::new(["cjs"]), &ctx(json!({"name": "a"}))).unwrap();
        assert_eq!(normalized.eslint, json!({"include": ["src/**"]}));
    }
}
