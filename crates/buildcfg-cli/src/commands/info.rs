//! Info command

use buildcfg_core::package::read_package_json;
use buildcfg_core::{ConfigResolver, ResolveOptions};
use buildcfg_fs::NormalizedPath;
use buildcfg_meta::Bundler;
use colored::Colorize;
use serde_json::Value;

use crate::error::Result;
use crate::output;

/// Run the info command
pub async fn run_info(root: &NormalizedPath, config: Option<&str>) -> Result<()> {
    println!("{} Gathering project information...", "→".cyan());
    println!();

    let manifest = read_package_json(root)?;
    let field = |key: &str, fallback: &str| {
        manifest
            .as_ref()
            .and_then(|pkg| pkg.get(key))
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    };

    let resolver = ConfigResolver::new(root.clone());
    let config_path = resolver.discover(config);
    let resolved = match &config_path {
        Some(_) => Some(
            resolver
                .resolve(&ResolveOptions {
                    config_path: config.map(str::to_string),
                    ..Default::default()
                })
                .await,
        ),
        None => None,
    };

    output::print_box(
        "Project Information",
        &[
            format!("Name:    {}", field("name", "unknown")),
            format!("Version: {}", field("version", "0.0.0")),
            format!(
                "Config:  {}",
                config_path.as_ref().map_or("not found", NormalizedPath::as_str)
            ),
            format!(
                "Bundler: {}",
                resolved
                    .as_ref()
                    .map_or("not configured", |r| r.bundler.as_str())
            ),
        ],
    );

    if let Some(resolved) = &resolved {
        println!();
        println!("{}", "Build Configuration:".bold());
        let rows = settings(&resolved.config, resolved.bundler);
        let last = rows.len().saturating_sub(1);
        for (index, (label, value)) in rows.into_iter().enumerate() {
            let branch = if index == last { "└─" } else { "├─" };
            println!("{} {:<13} {}", branch.dimmed(), format!("{label}:"), value);
        }
    }

    if let Some(exports) = manifest.as_ref().and_then(|pkg| pkg.get("exports")) {
        println!();
        println!("{}", "Package Exports:".bold());
        println!(
            "{}",
            serde_json::to_string_pretty(exports).unwrap_or_else(|_| exports.to_string())
        );
    }

    let scripts = manifest
        .as_ref()
        .map(build_scripts)
        .unwrap_or_default();
    if !scripts.is_empty() {
        println!();
        println!("{}", "Build Scripts:".bold());
        for (name, script) in scripts {
            println!("  {} {}", format!("{name:<20}").green(), script.dimmed());
        }
    }

    if resolved.is_none() {
        println!();
        println!("{}", "⚠ No build configuration found".yellow());
        println!("Run {} to set up your project", "rad-build init".green());
    }

    Ok(())
}

/// Labelled settings shown for the resolved config.
pub fn settings(config: &Value, bundler: Bundler) -> Vec<(&'static str, String)> {
    let mark = |on: bool| output::mark(on).to_string();
    match bundler {
        Bundler::Tsup => vec![
            ("Entry", output::json_or(config, "entry", r#"["src/index.ts"]"#)),
            ("Format", output::json_or(config, "format", r#"["esm","cjs"]"#)),
            ("Target", output::text_or(config, "target", "node18")),
            ("Platform", output::text_or(config, "platform", "node")),
            ("DTS", mark(output::on_unless_false(config, "dts"))),
            ("Sourcemap", mark(output::on_unless_false(config, "sourcemap"))),
            ("Minify", mark(output::on_if_truthy(config, "minify"))),
            ("Clean", mark(output::on_unless_false(config, "clean"))),
        ],
        Bundler::Unbuild => {
            let emits_cjs = config
                .get("rollup")
                .is_some_and(|rollup| output::on_if_truthy(rollup, "emitCJS"));
            vec![
                ("Entries", output::json_or(config, "entries", r#"["src/index"]"#)),
                ("Out Dir", output::text_or(config, "outDir", "dist")),
                ("Declaration", mark(output::on_unless_false(config, "declaration"))),
                ("Emit CJS", mark(emits_cjs)),
                ("Sourcemap", mark(output::on_if_truthy(config, "sourcemap"))),
                ("Parallel", mark(output::on_unless_false(config, "parallel"))),
                ("Clean", mark(output::on_unless_false(config, "clean"))),
            ]
        }
    }
}

/// `scripts` entries whose name mentions `build` or `watch`.
pub fn build_scripts(manifest: &Value) -> Vec<(String, String)> {
    manifest
        .get("scripts")
        .and_then(Value::as_object)
        .map(|scripts| {
            scripts
                .iter()
                .filter(|(name, _)| name.contains("build") || name.contains("watch"))
                .filter_map(|(name, script)| Some((name.clone(), script.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_scripts_filter() {
        let manifest = json!({ "scripts": {
            "build": "tsup",
            "test": "vitest",
            "dev:watch": "tsup --watch",
        } });
        assert_eq!(
            build_scripts(&manifest),
            vec![
                ("build".to_string(), "tsup".to_string()),
                ("dev:watch".to_string(), "tsup --watch".to_string()),
            ]
        );
    }

    #[test]
    fn test_unbuild_settings_defaults() {
        colored::control::set_override(false);
        let rows = settings(&json!({}), Bundler::Unbuild);
        assert_eq!(rows[0], ("Entries", r#"["src/index"]"#.to_string()));
        assert_eq!(rows[1], ("Out Dir", "dist".to_string()));
        assert_eq!(rows[3], ("Emit CJS", "✗".to_string()));
    }
}
