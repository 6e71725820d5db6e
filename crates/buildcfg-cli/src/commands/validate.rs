//! Validate command

use buildcfg_core::ConfigResolver;
use buildcfg_fs::NormalizedPath;
use buildcfg_meta::{Bundler, BundlerChoice, validate};
use colored::Colorize;
use serde_json::{Map, Value};

use crate::error::{CliError, Result};
use crate::output;

/// Run the validate command
///
/// Fails when no config file is found or when any recognized option has
/// the wrong type. A config that cannot be loaded is logged and validated
/// as empty.
pub async fn run_validate(
    root: &NormalizedPath,
    config: Option<&str>,
    bundler: BundlerChoice,
) -> Result<()> {
    println!("{} Validating configuration...", "→".cyan());

    let resolver = ConfigResolver::new(root.clone());
    let Some(path) = resolver.discover(config) else {
        return Err(CliError::user(
            "No configuration file found. Run 'rad-build init' to create one.",
        ));
    };
    println!("Found config: {}", path.as_str().yellow());

    let project_config = resolver
        .loader()
        .load(&path)
        .await
        .unwrap_or_else(|| Value::Object(Map::new()));
    let bundler = resolver.select_bundler(bundler).await;
    println!("Detected bundler: {}", output::bundler(bundler));

    let report = validate(&project_config, bundler);
    if !report.is_valid() {
        println!("{}", "✗ Configuration validation failed".red().bold());
        println!();
        println!("{}", "Validation errors:".bold());
        for error in report.errors() {
            println!("  {} {}", "•".red(), error);
        }
        return Err(CliError::user(format!(
            "{} invalid option(s) in {}",
            report.errors().len(),
            path
        )));
    }

    println!("{}", "✓ Configuration is valid!".green().bold());
    println!();
    println!("{}", "Configuration summary:".bold());
    for line in summary(&project_config, bundler) {
        println!("  {}", line);
    }
    Ok(())
}

/// Key settings of a valid config, with defaults filled in.
pub fn summary(config: &Value, bundler: Bundler) -> Vec<String> {
    match bundler {
        Bundler::Tsup => vec![
            format!("Entry: {}", output::json_or(config, "entry", r#"["src/index.ts"]"#)),
            format!("Format: {}", output::json_or(config, "format", r#"["esm","cjs"]"#)),
            format!("DTS: {}", output::enabled(output::on_unless_false(config, "dts"))),
            format!(
                "Sourcemap: {}",
                output::enabled(output::on_unless_false(config, "sourcemap"))
            ),
        ],
        Bundler::Unbuild => {
            let emits_cjs = config
                .get("rollup")
                .is_some_and(|rollup| output::on_if_truthy(rollup, "emitCJS"));
            vec![
                format!("Entries: {}", output::json_or(config, "entries", r#"["src/index"]"#)),
                format!(
                    "Declaration: {}",
                    output::enabled(output::on_unless_false(config, "declaration"))
                ),
                format!("CJS: {}", output::enabled(emits_cjs)),
            ]
        }
    }
}
