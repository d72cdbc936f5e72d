//! Dispatcher behavior across targets, overrides and manifest inputs.

use bundlecfg_config::{
    configure, AliasEntry, BuildContext, BuildDescriptor, Configured, Manifest, Options,
    RuntimeMode, Variant,
};
use serde_json::json;
use std::path::PathBuf;

fn context(manifest: serde_json::Value) -> BuildContext {
    let manifest: Manifest = serde_json::from_value(manifest).unwrap();
    BuildContext::new("/work/my-lib", manifest)
}

fn my_lib() -> BuildContext {
    context(json!({ "name": "my-lib", "dependencies": { "react": "*" } }))
}

#[test]
fn single_cjs_target_returns_one_descriptor() {
    let configured = configure(&Options::new(["cjs"]), &my_lib(), None).unwrap();
    let Configured::Single(descriptor) = &configured else {
        panic!("expected a single descriptor, got {configured:?}");
    };
    assert_eq!(descriptor.output.format, Variant::Cjs);

    let value = configured.to_value().unwrap();
    assert!(value.is_object());
    assert_eq!(value["output"]["format"], "cjs");
}

#[test]
fn several_targets_return_a_list_in_request_order() {
    let configured = configure(&Options::new(["umd", "cjs"]), &my_lib(), None).unwrap();
    let Configured::Many(all) = &configured else {
        panic!("expected a list");
    };
    let formats: Vec<_> = all.iter().map(BuildDescriptor::variant).collect();
    assert_eq!(formats, vec![Variant::Umd, Variant::Cjs]);
    assert!(configured.to_value().unwrap().is_array());
}

#[test]
fn unknown_target_builds_esm_and_umd() {
    let configured = configure(&Options::new(["iife"]), &my_lib(), None).unwrap();
    let formats: Vec<_> = configured
        .into_vec()
        .iter()
        .map(BuildDescriptor::variant)
        .collect();
    assert_eq!(formats, vec![Variant::Esm, Variant::Umd]);
}

#[test]
fn unknown_target_mixed_with_known_ones() {
    let configured = configure(&Options::new(["cjs", "whatever"]), &my_lib(), None).unwrap();
    assert_eq!(configured.count(), 3);
    let formats: Vec<_> = configured
        .into_vec()
        .iter()
        .map(BuildDescriptor::variant)
        .collect();
    assert!(formats.contains(&Variant::Esm));
    assert!(formats.contains(&Variant::Umd));
}

#[test]
fn empty_target_is_rejected() {
    let result = configure(&Options::default(), &my_lib(), None);
    assert!(matches!(
        result.unwrap_err(),
        bundlecfg_config::ConfigError::NoTargets
    ));
}

#[test]
fn esm_example_from_minimal_manifest() {
    let configured = configure(&Options::new(["esm"]), &my_lib(), None).unwrap();
    let descriptor = configured.as_single().unwrap();

    assert!(descriptor.external.contains(&"react".to_string()));
    assert_eq!(
        descriptor.output.file,
        PathBuf::from("/work/my-lib/dist/index.esm.js")
    );
    assert_eq!(descriptor.output.name, "myLib");
    assert!(descriptor.output.sourcemap);
    assert!(descriptor.output.globals.is_none());
    assert_eq!(
        descriptor.input,
        PathBuf::from("/work/my-lib/src/index.ts")
    );
}

#[test]
fn identity_override_changes_nothing() {
    let options = Options::new(["cjs", "esm", "umd"]).with_minify(true);
    let plain = configure(&options, &my_lib(), None).unwrap();
    let identity = |descriptor: BuildDescriptor| descriptor;
    let overridden = configure(&options, &my_lib(), Some(&identity)).unwrap();
    assert_eq!(plain, overridden);
}

#[test]
fn override_applies_to_every_descriptor() {
    let rename = |mut descriptor: BuildDescriptor| {
        descriptor.output.name = "Renamed".to_string();
        descriptor.external.push("extra".to_string());
        descriptor
    };
    let configured = configure(&Options::new(["cjs", "umd"]), &my_lib(), Some(&rename)).unwrap();
    for descriptor in configured.into_vec() {
        assert_eq!(descriptor.output.name, "Renamed");
        assert_eq!(descriptor.external.last().map(String::as_str), Some("extra"));
    }
}

#[test]
fn builds_are_deterministic() {
    let options = Options::new(["cjs", "esm", "umd"]).with_alias("~", "/work/my-lib/lib");
    let first = configure(&options, &my_lib(), None).unwrap();
    let second = configure(&options, &my_lib(), None).unwrap();
    assert_eq!(first.to_value().unwrap(), second.to_value().unwrap());
}

#[test]
fn first_alias_is_always_the_source_directory() {
    for target in ["cjs", "esm", "umd"] {
        let configured = configure(&Options::new([target]), &my_lib(), None).unwrap();
        let descriptor = configured.as_single().unwrap();
        let Some(bundlecfg_config::Plugin::Alias(alias)) = descriptor.plugin("@rollup/plugin-alias")
        else {
            panic!("{target}: alias plugin missing");
        };
        assert_eq!(
            alias.entries.first(),
            Some(&AliasEntry::new("@", "/work/my-lib/src")),
            "{target}"
        );
    }
}

#[test]
fn externals_union_dependencies_peers_and_user_list() {
    let ctx = context(json!({
        "name": "widgets",
        "dependencies": { "react": "*" },
        "peerDependencies": { "react-dom": "*", "react": "*" }
    }));
    let options = Options::new(["cjs"]).with_external("path").with_external("react-dom");
    let configured = configure(&options, &ctx, None).unwrap();
    assert_eq!(
        configured.as_single().unwrap().external,
        vec!["react", "react-dom", "path"]
    );
}

#[test]
fn umd_carries_globals() {
    let options = Options::new(["umd"]).with_global("react", "React");
    let configured = configure(&options, &my_lib(), None).unwrap();
    let value = configured.to_value().unwrap();
    assert_eq!(value["output"]["globals"], json!({ "react": "React" }));
    assert_eq!(value["output"]["format"], "umd");
}

#[test]
fn umd_without_globals_serializes_empty_map() {
    let configured = configure(&Options::new(["umd"]), &my_lib(), None).unwrap();
    assert_eq!(configured.to_value().unwrap()["output"]["globals"], json!({}));
}

#[test]
fn manifest_output_fields_are_used() {
    let ctx = context(json!({
        "name": "my-lib",
        "main": "lib/index.js",
        "module": "es/index.js",
        "browser": "umd/index.js"
    }));
    let configured = configure(&Options::new(["cjs", "esm", "umd"]), &ctx, None).unwrap();
    let files: Vec<_> = configured
        .into_vec()
        .into_iter()
        .map(|d| d.output.file)
        .collect();
    assert_eq!(
        files,
        vec![
            PathBuf::from("lib/index.js"),
            PathBuf::from("es/index.js"),
            PathBuf::from("umd/index.js"),
        ]
    );
}

#[test]
fn manifest_without_name_is_a_configuration_error() {
    let ctx = context(json!({ "dependencies": { "react": "*" } }));
    let result = configure(&Options::new(["cjs"]), &ctx, None);
    assert!(matches!(
        result.unwrap_err(),
        bundlecfg_config::ConfigError::MissingManifestField { .. }
    ));
}

#[test]
fn development_mode_reaches_every_variant() {
    let ctx = my_lib().with_mode(RuntimeMode::Development);
    let configured = configure(&Options::new(["cjs", "esm", "umd"]), &ctx, None).unwrap();
    for descriptor in configured.into_vec() {
        let Some(bundlecfg_config::Plugin::Babel(babel)) = descriptor.plugin("rollup-plugin-babel")
        else {
            panic!("babel plugin missing");
        };
        assert!(babel.has_plugin("@babel/plugin-transform-react-jsx-self"));
        assert!(babel.has_plugin("@babel/plugin-transform-react-jsx-source"));
    }
}
