//! Options layering for the CLI.
//!
//! Priority: CLI flags > `BUNDLECFG_*` environment variables > options file.
//! Layers are merged as JSON so that alias and globals maps keep the order
//! they were written in.

use std::path::{Path, PathBuf};

use bundlecfg_config::{discovery, BuildContext, Options, OptionsDiscovery, RuntimeMode};
use figment::providers::Env;
use serde_json::{json, Map, Value};

use crate::cli::{GenerateArgs, ProjectArgs};
use crate::error::Result;

pub const ENV_PREFIX: &str = "BUNDLECFG_";

/// Project directory from `--cwd`, else the current directory.
pub fn project_dir(args: &ProjectArgs) -> Result<PathBuf> {
    match &args.cwd {
        Some(dir) => Ok(dir.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Options file contents, or an empty object when there is none.
pub fn file_layer(args: &ProjectArgs, root: &Path) -> Result<Value> {
    let value = match &args.config {
        Some(path) => Some(discovery::load_value(&root.join(path))?),
        None => OptionsDiscovery::new(root).load_value()?,
    };
    if value.is_none() {
        tracing::debug!(root = %root.display(), "no options file found");
    }
    Ok(value.unwrap_or_else(|| json!({})))
}

/// Map `BUNDLECFG_IS_TYPESCRIPT` style keys onto option names.
fn env_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// `BUNDLECFG_*` variables as a JSON object.
///
/// Values use figment's env syntax: `true`, `[cjs, umd]`, `{react = "React"}`.
pub fn env_layer() -> Result<Value> {
    let mut layer = Map::new();
    for (key, raw) in Env::prefixed(ENV_PREFIX).iter() {
        let Ok(parsed) = raw.parse::<figment::value::Value>();
        let name = env_key(key.as_str());
        tracing::debug!(variable = %key, option = %name, "option from environment");
        layer.insert(name, serde_json::to_value(parsed)?);
    }
    Ok(Value::Object(layer))
}

/// Flags that were actually given on the command line.
pub fn cli_layer(args: &GenerateArgs) -> Value {
    let mut layer = Map::new();

    if !args.targets.is_empty() {
        layer.insert("target".into(), json!(args.targets));
    }
    if let Some(input) = &args.input {
        layer.insert("input".into(), json!(input));
    }
    if !args.externals.is_empty() {
        layer.insert("external".into(), json!(args.externals));
    }
    if !args.aliases.is_empty() {
        let aliases: Map<String, Value> = args
            .aliases
            .iter()
            .map(|(find, path)| (find.clone(), json!(path)))
            .collect();
        layer.insert("alias".into(), Value::Object(aliases));
    }
    if !args.globals.is_empty() {
        let globals: Map<String, Value> = args
            .globals
            .iter()
            .map(|(module, name)| (module.clone(), json!(name)))
            .collect();
        layer.insert("globals".into(), Value::Object(globals));
    }
    if args.minify {
        layer.insert("minify".into(), json!(true));
    }
    if args.no_filesize {
        layer.insert("filesize".into(), json!(false));
    }
    if args.no_typescript {
        layer.insert("isTypescript".into(), json!(false));
    }

    Value::Object(layer)
}

/// Deep-merge `update` into `target`. Objects merge key by key; arrays and
/// scalars replace.
pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

/// Load options for `generate`.
pub fn load_options(args: &GenerateArgs, root: &Path) -> Result<Options> {
    let mut merged = file_layer(&args.project, root)?;
    merge_values(&mut merged, &env_layer()?);
    merge_values(&mut merged, &cli_layer(args));
    Ok(Options::from_value(merged)?)
}

/// Load options for `check`: file and environment only.
pub fn load_project_options(args: &ProjectArgs, root: &Path) -> Result<Options> {
    let mut merged = file_layer(args, root)?;
    merge_values(&mut merged, &env_layer()?);
    Ok(Options::from_value(merged)?)
}

/// Build context from the project directory and the runtime mode.
pub fn build_context(root: &Path, node_env: Option<&str>) -> Result<BuildContext> {
    let env_value = std::env::var("NODE_ENV").ok();
    let mode = RuntimeMode::from_node_env(node_env.or(env_value.as_deref()));
    Ok(BuildContext::load(root)?.with_mode(mode))
}
