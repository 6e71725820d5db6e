//! Bundler detection from project files

use buildcfg_fs::{NormalizedPath, io};
use buildcfg_meta::Bundler;
use serde_json::Value;

use super::loader::ConfigLoader;

const CONFIG_EXTENSIONS: &[&str] = &["ts", "js", "mjs"];

/// Guess which bundler the project at `root` already uses.
///
/// Checked in order, first match wins:
///
/// 1. a `tsup.config.*` file exists
/// 2. a `build.config.*` file loads and exposes `entries` or `rollup`
///    (or is an array whose first element has `entries`)
/// 3. the `build` script of `package.json` mentions `tsup`, then `unbuild`
///
/// Load failures in step 2 are skipped over.
pub async fn detect_bundler(root: &NormalizedPath, loader: &ConfigLoader) -> Option<Bundler> {
    if let Some(path) = config_candidates(root, Bundler::Tsup).find(NormalizedPath::is_file) {
        tracing::debug!(path = %path, "Detected tsup from config file");
        return Some(Bundler::Tsup);
    }

    for path in config_candidates(root, Bundler::Unbuild).filter(NormalizedPath::is_file) {
        match loader.try_load_raw(&path).await {
            Ok(Some(config)) if looks_like_unbuild(&config) => {
                tracing::debug!(path = %path, "Detected unbuild from config file");
                return Some(Bundler::Unbuild);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(path = %path, error = %e, "Skipping unloadable config"),
        }
    }

    let bundler = build_script(root).and_then(|script| bundler_in_script(&script));
    if let Some(bundler) = bundler {
        tracing::debug!(%bundler, "Detected bundler from build script");
    }
    bundler
}

fn config_candidates(
    root: &NormalizedPath,
    bundler: Bundler,
) -> impl Iterator<Item = NormalizedPath> + '_ {
    CONFIG_EXTENSIONS
        .iter()
        .map(move |ext| root.join(&format!("{}.{}", bundler.config_stem(), ext)))
}

fn looks_like_unbuild(config: &Value) -> bool {
    match config {
        Value::Array(items) => items.first().is_some_and(|first| first.get("entries").is_some()),
        _ => config.get("entries").is_some() || config.get("rollup").is_some(),
    }
}

fn build_script(root: &NormalizedPath) -> Option<String> {
    let manifest = root.join("package.json");
    if !manifest.is_file() {
        return None;
    }
    let pkg: Value = serde_json::from_str(&io::read_text(&manifest).ok()?).ok()?;
    pkg.get("scripts")?
        .get("build")?
        .as_str()
        .map(str::to_string)
}

/// Substring match on a build script, tsup checked first.
fn bundler_in_script(script: &str) -> Option<Bundler> {
    if script.contains("tsup") {
        Some(Bundler::Tsup)
    } else if script.contains("unbuild") {
        Some(Bundler::Unbuild)
    } else {
        None
    }
}
