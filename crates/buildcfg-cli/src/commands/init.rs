//! Init command implementation

use buildcfg_core::package::{
    config_file_name, generate_config_file, init_manifest_updates, read_package_json,
    update_package_json,
};
use buildcfg_fs::{NormalizedPath, io};
use buildcfg_meta::Bundler;
use buildcfg_presets::PresetRegistry;
use colored::Colorize;
use serde_json::{Value, json};

use crate::error::{CliError, Result};
use crate::interactive;

/// Config files whose presence makes init ask before overwriting.
const EXISTING_CONFIGS: &[&str] = &["tsup.config.ts", "build.config.ts"];

/// Flags given to `init`; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub bundler: Option<Bundler>,
    pub preset: Option<String>,
    pub force: bool,
}

/// Optional features offered for a custom configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Sourcemaps,
    Minify,
    Declarations,
}

/// Run the init command
pub fn run_init(root: &NormalizedPath, options: &InitOptions) -> Result<()> {
    println!("{}", "Welcome to @adddog/build-configs!".bold());
    println!();

    let exists = EXISTING_CONFIGS
        .iter()
        .any(|name| root.join(name).is_file());
    if exists && !options.force && !interactive::confirm_overwrite()? {
        println!("{}", "Operation cancelled".yellow());
        return Ok(());
    }

    let registry = PresetRegistry::with_builtins();
    let bundler = match options.bundler {
        Some(bundler) => bundler,
        None => interactive::select_bundler()?,
    };

    let (preset, config) = match options.preset.as_deref() {
        Some(name) => (Some(name.to_string()), preset_config(&registry, name, bundler)?),
        None => interactive::choose_config(&registry, bundler)?,
    };

    let file_name = write_init_files(root, bundler, &config)?;

    println!("{} Configuration created successfully!", "✓".green());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. {} - Install dependencies", "pnpm install".green());
    println!("  2. {} - Build your project", "pnpm build".green());
    println!("  3. Edit {} to customize", file_name.yellow());
    if let Some(preset) = preset {
        println!();
        println!("Using preset: {}", preset.cyan());
    }
    Ok(())
}

/// The named preset's config for `bundler`.
pub fn preset_config(registry: &PresetRegistry, name: &str, bundler: Bundler) -> Result<Value> {
    let preset = registry.require(name)?;
    if !preset.supports(bundler) {
        return Err(CliError::user(format!(
            "Preset '{}' has no {} configuration (supports {})",
            name,
            bundler,
            preset.bundler.as_str()
        )));
    }
    Ok(preset.config_for(bundler))
}

/// Config built from the answers of a custom setup.
///
/// No formats selected falls back to ESM.
pub fn custom_config(bundler: Bundler, formats: &[&str], features: &[Feature]) -> Value {
    let formats: Vec<&str> = if formats.is_empty() {
        vec!["esm"]
    } else {
        formats.to_vec()
    };
    let has = |feature: Feature| features.contains(&feature);

    let mut config = json!({
        "format": formats,
        "sourcemap": has(Feature::Sourcemaps),
        "minify": has(Feature::Minify),
    });
    if let Value::Object(map) = &mut config {
        match bundler {
            Bundler::Tsup => {
                map.insert("dts".to_string(), json!(has(Feature::Declarations)));
            }
            Bundler::Unbuild => {
                map.insert(
                    "declaration".to_string(),
                    json!(has(Feature::Declarations)),
                );
                map.insert(
                    "rollup".to_string(),
                    json!({ "emitCJS": formats.contains(&"cjs") }),
                );
            }
        }
    }
    config
}

/// Write the config file and, when a `package.json` exists, point it at the
/// build output. Returns the config file name.
pub fn write_init_files(root: &NormalizedPath, bundler: Bundler, config: &Value) -> Result<String> {
    let file_name = config_file_name(bundler);
    io::write_text(&root.join(&file_name), &generate_config_file(bundler, config))?;
    tracing::debug!(file = %file_name, "Wrote config file");

    if read_package_json(root)?.is_some() {
        update_package_json(root, &init_manifest_updates(bundler, config))?;
    } else {
        tracing::warn!("No package.json found, skipping manifest update");
    }
    Ok(file_name)
}
