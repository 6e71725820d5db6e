//! `package.json` helpers and starter config templates

use crate::config::merge_with_precedence;
use crate::module::render_value;
use crate::{Error, Result};
use buildcfg_fs::{NormalizedPath, io};
use buildcfg_meta::Bundler;
use serde_json::{Map, Value, json};

/// npm package that ships the config helpers imported by generated config files.
pub const HELPER_PACKAGE: &str = "@adddog/build-configs";

/// Read `package.json` from `root`. `None` when the file does not exist.
pub fn read_package_json(root: &NormalizedPath) -> Result<Option<Value>> {
    let path = root.join("package.json");
    if !path.is_file() {
        return Ok(None);
    }
    let content = io::read_text(&path)?;
    let pkg = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.clone(),
        source,
    })?;
    Ok(Some(pkg))
}

/// Deep-merge `updates` over the existing `package.json` and write it back.
///
/// `null` entries in `updates` leave the existing value alone. The manifest
/// is written pretty-printed with a trailing newline. Returns the new manifest.
pub fn update_package_json(root: &NormalizedPath, updates: &Value) -> Result<Value> {
    let existing = read_package_json(root)?.unwrap_or_else(|| Value::Object(Map::new()));
    let updated = merge_with_precedence(updates, &existing);

    let path = root.join("package.json");
    let mut content = serde_json::to_string_pretty(&updated)?;
    content.push('\n');
    io::write_text(&path, &content)?;

    tracing::debug!(path = %path, "Updated package.json");
    Ok(updated)
}

/// npm scripts that build with `bundler`.
pub fn generate_scripts(bundler: Bundler) -> Value {
    json!({
        "build": bundler.command(),
        "build:watch": format!("{} --watch", bundler.command()),
        "prepublishOnly": "pnpm build",
    })
}

/// `exports` map for the given output formats.
///
/// ESM maps `import` to `index.mjs`, CJS maps `require` to `index.cjs`.
/// Without ESM the export is CJS-only.
pub fn generate_exports<S: AsRef<str>>(formats: &[S]) -> Value {
    let has = |format: &str| formats.iter().any(|f| f.as_ref() == format);

    let mut entry = Map::new();
    entry.insert("types".to_string(), json!("./dist/index.d.ts"));
    if has("esm") {
        entry.insert("import".to_string(), json!("./dist/index.mjs"));
    }
    if has("cjs") || !has("esm") {
        entry.insert("require".to_string(), json!("./dist/index.cjs"));
    }

    json!({ ".": entry })
}

/// Output formats named by a config's `format` key, defaulting to ESM + CJS.
pub fn output_formats(config: &Value) -> Vec<String> {
    match config.get("format") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(format)) => vec![format.clone()],
        _ => vec!["esm".to_string(), "cjs".to_string()],
    }
}

/// Manifest fields written by `init` for a project built with `bundler`.
pub fn init_manifest_updates(bundler: Bundler, config: &Value) -> Value {
    let formats = output_formats(config);
    let emits_cjs = formats.iter().any(|f| f == "cjs")
        || config
            .get("rollup")
            .and_then(|rollup| rollup.get("emitCJS"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
    let main = if emits_cjs {
        json!("./dist/index.cjs")
    } else {
        Value::Null
    };

    json!({
        "scripts": generate_scripts(bundler),
        "exports": generate_exports(&formats),
        "main": main,
        "module": "./dist/index.mjs",
        "types": "./dist/index.d.ts",
        "files": ["dist"],
    })
}

/// File name `init` writes for `bundler`.
pub fn config_file_name(bundler: Bundler) -> String {
    format!("{}.ts", bundler.config_stem())
}

/// Source of a `tsup.config.ts` that calls the tsup helper with `options`.
pub fn generate_tsup_config_file(options: &Value) -> String {
    let starter = json!({
        "entry": ["src/index.ts"],
        "format": ["esm", "cjs"],
        "dts": true,
        "sourcemap": true,
        "clean": true,
    });
    let config = merge_with_precedence(options, &starter);

    format!(
        "import {{ makeTsupConfig }} from \"{}/tsup\";\n\nexport default makeTsupConfig({});\n",
        HELPER_PACKAGE,
        render_value(&config)
    )
}

/// Source of a `build.config.ts` that calls the unbuild helper with `options`.
pub fn generate_unbuild_config_file(options: &Value) -> String {
    let starter = json!({
        "entries": ["src/index"],
        "declaration": true,
        "rollup": { "emitCJS": false },
    });
    let config = merge_with_precedence(options, &starter);

    format!(
        "import {{ makeUnbuildConfig }} from \"{}/unbuild\";\n\nexport default makeUnbuildConfig({});\n",
        HELPER_PACKAGE,
        render_value(&config)
    )
}

/// Starter config file source for `bundler`.
pub fn generate_config_file(bundler: Bundler, options: &Value) -> String {
    match bundler {
        Bundler::Tsup => generate_tsup_config_file(options),
        Bundler::Unbuild => generate_unbuild_config_file(options),
    }
}
