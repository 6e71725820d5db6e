//! Resolution, discovery and detection against scratch projects

mod common;

use buildcfg_core::config::{detect_bundler, discover_config_file};
use buildcfg_core::defaults::{tsup_baseline, unbuild_baseline};
use buildcfg_core::{ConfigResolver, ResolveOptions};
use buildcfg_meta::{Bundler, BundlerChoice};
use buildcfg_test_utils::TestProject;
use common::resolver_with_modules;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn options(bundler: BundlerChoice) -> ResolveOptions {
    ResolveOptions {
        bundler,
        cli_flags: json!({}),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_disjoint_flags_and_project_config_union() {
    let project = TestProject::package("lib")
        .with_file(".radbuildrc.json", r#"{ "sourcemap": false }"#);
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver
        .resolve(&ResolveOptions {
            cli_flags: json!({ "minify": true }),
            ..options(BundlerChoice::Tsup)
        })
        .await;

    assert_eq!(resolved.config, json!({ "sourcemap": false, "minify": true }));
}

#[tokio::test]
async fn test_cli_flag_wins_over_every_layer() {
    let project = TestProject::package("lib")
        .with_file(".radbuildrc.json", r#"{ "target": "node20" }"#);
    let resolver = ConfigResolver::new(project.root());

    // library-browser targets es2020, the baseline node18
    let resolved = resolver
        .resolve(&ResolveOptions {
            preset: Some("library-browser".to_string()),
            cli_flags: json!({ "target": "es2019" }),
            ..options(BundlerChoice::Tsup)
        })
        .await;

    assert_eq!(resolved.config["target"], json!("es2019"));
    assert_eq!(resolved.native_config()["target"], json!("es2019"));
}

#[tokio::test]
async fn test_project_config_wins_over_preset() {
    let project = TestProject::package("lib")
        .with_file(".radbuildrc.json", r#"{ "target": "node20" }"#);
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver
        .resolve(&ResolveOptions {
            preset: Some("library-browser".to_string()),
            ..options(BundlerChoice::Tsup)
        })
        .await;

    assert_eq!(resolved.config["target"], json!("node20"));
    assert_eq!(resolved.config["platform"], json!("browser"));
    assert_eq!(resolved.config["minify"], json!(true));
}

#[tokio::test]
async fn test_preset_config_follows_bundler() {
    let project = TestProject::package("lib");
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver
        .resolve(&ResolveOptions {
            preset: Some("library-dual".to_string()),
            ..options(BundlerChoice::Unbuild)
        })
        .await;

    assert_eq!(
        resolved.config,
        json!({ "rollup": { "emitCJS": true }, "declaration": "compatible" })
    );
    assert_eq!(resolved.native_config()["rollup"]["inlineDependencies"], json!(false));
}

#[rstest]
#[case::tsup(BundlerChoice::Tsup, tsup_baseline())]
#[case::unbuild(BundlerChoice::Unbuild, unbuild_baseline())]
#[tokio::test]
async fn test_no_sources_yields_baseline(
    #[case] choice: BundlerChoice,
    #[case] baseline: serde_json::Value,
) {
    let project = TestProject::package("lib");
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver.resolve(&options(choice)).await;

    assert_eq!(resolved.config, json!({}));
    assert_eq!(resolved.config_path, None);
    assert_eq!(resolved.native_config(), baseline);
}

#[tokio::test]
async fn test_manifest_field_is_a_config_source() {
    let project = TestProject::new().with_package_json(json!({
        "name": "lib",
        "radbuild": { "entries": ["src/cli"] },
    }));
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver.resolve(&options(BundlerChoice::Unbuild)).await;

    assert_eq!(resolved.config, json!({ "entries": ["src/cli"] }));
    assert_eq!(
        resolved.config_path.as_ref().and_then(|p| p.file_name()),
        Some("package.json")
    );
}

#[tokio::test]
async fn test_broken_project_config_contributes_nothing() {
    let project = TestProject::package("lib").with_file(".radbuildrc.json", "{ nope");
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver
        .resolve(&ResolveOptions {
            cli_flags: json!({ "clean": false }),
            ..options(BundlerChoice::Tsup)
        })
        .await;

    assert_eq!(resolved.config, json!({ "clean": false }));
    assert!(resolved.config_path.is_some());
}

#[tokio::test]
async fn test_explicit_config_path() {
    let project = TestProject::package("lib")
        .with_file("configs/release.json", r#"{ "minify": true }"#)
        .with_file(".radbuildrc.json", r#"{ "minify": false }"#);
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver
        .resolve(&ResolveOptions {
            config_path: Some("configs/release.json".to_string()),
            ..options(BundlerChoice::Tsup)
        })
        .await;

    assert_eq!(resolved.config, json!({ "minify": true }));
}

#[tokio::test]
async fn test_module_config_goes_through_evaluator() {
    let project = TestProject::package("lib");
    let resolver = resolver_with_modules(
        &project,
        &[("tsup.config.ts", json!({ "entry": ["src/main.ts"], "dts": true }))],
    );

    let resolved = resolver.resolve(&options(BundlerChoice::Auto)).await;

    assert_eq!(resolved.bundler, Bundler::Tsup);
    assert_eq!(resolved.config, json!({ "entry": ["src/main.ts"], "dts": true }));
}

#[test]
fn test_discovery_order() {
    let project = TestProject::package("lib")
        .with_file(".radbuildrc.json", "{}")
        .with_file("build.config.ts", "export default {}")
        .with_file("tsup.config.js", "export default {}");

    let found = discover_config_file(&project.root(), None).unwrap();
    assert_eq!(found.file_name(), Some("tsup.config.js"));

    std::fs::remove_file(project.path().join("tsup.config.js")).unwrap();
    let found = discover_config_file(&project.root(), None).unwrap();
    assert_eq!(found.file_name(), Some("build.config.ts"));
}

#[tokio::test]
async fn test_detects_unbuild_from_build_config_with_entries() {
    let project = TestProject::package("lib");
    let resolver = resolver_with_modules(
        &project,
        &[("build.config.ts", json!({ "entries": ["src/index"] }))],
    );

    assert_eq!(
        detect_bundler(resolver.root(), resolver.loader()).await,
        Some(Bundler::Unbuild)
    );
}

#[tokio::test]
async fn test_tsup_config_overrides_build_config() {
    let project = TestProject::package("lib");
    let resolver = resolver_with_modules(
        &project,
        &[
            ("build.config.ts", json!({ "entries": ["src/index"] })),
            ("tsup.config.ts", json!({ "entry": ["src/index.ts"] })),
        ],
    );

    assert_eq!(
        detect_bundler(resolver.root(), resolver.loader()).await,
        Some(Bundler::Tsup)
    );
}

#[tokio::test]
async fn test_unloadable_build_config_is_skipped() {
    let project = TestProject::package("lib");
    // build.config.ts has no registered export, so evaluating it fails
    project.write_file("build.config.ts", "export default {\n");
    let resolver = resolver_with_modules(
        &project,
        &[("build.config.js", json!({ "rollup": {} }))],
    );

    assert_eq!(
        detect_bundler(resolver.root(), resolver.loader()).await,
        Some(Bundler::Unbuild)
    );
}

#[tokio::test]
async fn test_build_config_without_unbuild_keys_falls_through_to_script() {
    let project = TestProject::new().with_package_json(json!({
        "name": "lib",
        "scripts": { "build": "tsup src/index.ts" },
    }));
    let resolver = resolver_with_modules(
        &project,
        &[("build.config.ts", json!({ "name": "not-unbuild" }))],
    );

    assert_eq!(
        detect_bundler(resolver.root(), resolver.loader()).await,
        Some(Bundler::Tsup)
    );
}

#[rstest]
#[case::tsup("tsup", Some(Bundler::Tsup))]
#[case::unbuild("unbuild --minify", Some(Bundler::Unbuild))]
#[case::other("vite build", None)]
#[tokio::test]
async fn test_detects_from_build_script(#[case] script: &str, #[case] expected: Option<Bundler>) {
    let project = TestProject::new().with_package_json(json!({
        "name": "lib",
        "scripts": { "build": script },
    }));
    let resolver = ConfigResolver::new(project.root());

    assert_eq!(detect_bundler(resolver.root(), resolver.loader()).await, expected);
}

#[tokio::test]
async fn test_undetected_project_falls_back_to_unbuild() {
    let project = TestProject::package("lib");
    let resolver = ConfigResolver::new(project.root());

    let resolved = resolver.resolve(&options(BundlerChoice::Auto)).await;
    assert_eq!(resolved.bundler, Bundler::Unbuild);
}
