//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use buildcfg_meta::Bundler;
use buildcfg_presets::PresetRegistry;
use dialoguer::{Confirm, MultiSelect, Select};
use serde_json::Value;

use crate::commands::init::{Feature, custom_config};
use crate::error::Result;

const BUNDLERS: [(Bundler, &str); 2] = [
    (Bundler::Unbuild, "unbuild - Preserves file structure, better for libraries"),
    (Bundler::Tsup, "tsup - Faster builds, bundles everything"),
];

const FEATURES: [(Feature, &str, bool); 3] = [
    (Feature::Sourcemaps, "Generate sourcemaps", true),
    (Feature::Minify, "Minify output", false),
    (Feature::Declarations, "TypeScript declarations", true),
];

pub fn confirm_overwrite() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Config file already exists. Overwrite?")
        .default(false)
        .interact()?)
}

pub fn select_bundler() -> Result<Bundler> {
    let labels: Vec<&str> = BUNDLERS.iter().map(|(_, label)| *label).collect();
    let index = Select::new()
        .with_prompt("Which bundler do you prefer?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(BUNDLERS[index].0)
}

/// Ask for a preset or a custom setup.
///
/// Returns the chosen preset name, if any, and the config to write.
pub fn choose_config(
    registry: &PresetRegistry,
    bundler: Bundler,
) -> Result<(Option<String>, Value)> {
    let mode = Select::new()
        .with_prompt("Start with a preset or custom config?")
        .items(&["Use a preset", "Custom configuration"])
        .default(0)
        .interact()?;

    if mode == 0 {
        let presets = registry.by_bundler(bundler);
        let labels: Vec<String> = presets
            .iter()
            .map(|preset| format!("{:<25} {}", preset.name, preset.description))
            .collect();
        let index = Select::new()
            .with_prompt("Select a preset")
            .items(&labels)
            .default(0)
            .interact()?;
        let preset = presets[index];
        return Ok((Some(preset.name.clone()), preset.config_for(bundler)));
    }

    let mut formats = vec![("esm", "ESM (modern)", true), ("cjs", "CommonJS (compatibility)", false)];
    if bundler == Bundler::Tsup {
        formats.push(("iife", "IIFE (browser global)", false));
    }
    let format_labels: Vec<&str> = formats.iter().map(|(_, label, _)| *label).collect();
    let format_defaults: Vec<bool> = formats.iter().map(|(_, _, on)| *on).collect();
    let chosen_formats: Vec<&str> = MultiSelect::new()
        .with_prompt("Output formats? (space to toggle, enter to confirm)")
        .items(&format_labels)
        .defaults(&format_defaults)
        .interact()?
        .into_iter()
        .map(|index| formats[index].0)
        .collect();

    let feature_labels: Vec<&str> = FEATURES.iter().map(|(_, label, _)| *label).collect();
    let feature_defaults: Vec<bool> = FEATURES.iter().map(|(_, _, on)| *on).collect();
    let chosen_features: Vec<Feature> = MultiSelect::new()
        .with_prompt("Additional features?")
        .items(&feature_labels)
        .defaults(&feature_defaults)
        .interact()?
        .into_iter()
        .map(|index| FEATURES[index].0)
        .collect();

    Ok((None, custom_config(bundler, &chosen_formats, &chosen_features)))
}
