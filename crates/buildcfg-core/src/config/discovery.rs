//! Project config file discovery

use buildcfg_fs::{NormalizedPath, io};
use serde_json::Value;

/// Config file names searched in the project root, in priority order.
pub const CONFIG_FILES: &[&str] = &[
    "tsup.config.ts",
    "tsup.config.js",
    "tsup.config.mjs",
    "build.config.ts",
    "build.config.js",
    "build.config.mjs",
    ".radbuildrc.ts",
    ".radbuildrc.js",
    ".radbuildrc.json",
];

/// `package.json` field that may hold the project config.
pub const MANIFEST_FIELD: &str = "radbuild";

/// Find the project config file for `root`.
///
/// An explicit path is resolved against `root` and used as-is when it
/// exists; a missing explicit path yields `None` without searching further.
/// Otherwise the first existing entry of [`CONFIG_FILES`] wins, then
/// `package.json` if its [`MANIFEST_FIELD`] field is set to a truthy value.
pub fn discover_config_file(
    root: &NormalizedPath,
    explicit: Option<&str>,
) -> Option<NormalizedPath> {
    if let Some(candidate) = explicit {
        let path = NormalizedPath::resolve(root, candidate);
        if path.is_file() {
            tracing::debug!(path = %path, "Using explicit config file");
            return Some(path);
        }
        tracing::warn!(path = %path, "Config file not found");
        return None;
    }

    for name in CONFIG_FILES {
        let path = root.join(name);
        if path.is_file() {
            tracing::debug!(path = %path, "Discovered config file");
            return Some(path);
        }
    }

    let manifest = root.join("package.json");
    if manifest_has_config(&manifest) {
        tracing::debug!(path = %manifest, "Using {} field of package.json", MANIFEST_FIELD);
        return Some(manifest);
    }

    tracing::debug!(root = %root, "No project config found");
    None
}

fn manifest_has_config(manifest: &NormalizedPath) -> bool {
    if !manifest.is_file() {
        return false;
    }
    let Ok(content) = io::read_text(manifest) else {
        return false;
    };
    serde_json::from_str::<Value>(&content)
        .ok()
        .and_then(|pkg| pkg.get(MANIFEST_FIELD).cloned())
        .is_some_and(|field| is_truthy(&field))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn root(temp: &TempDir) -> NormalizedPath {
        NormalizedPath::new(temp.path())
    }

    #[test]
    fn test_empty_directory_has_no_config() {
        let temp = TempDir::new().unwrap();
        assert_eq!(discover_config_file(&root(&temp), None), None);
    }

    #[test]
    fn test_manifest_without_field_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name":"pkg"}"#).unwrap();
        assert_eq!(discover_config_file(&root(&temp), None), None);
    }

    #[test]
    fn test_falsy_manifest_field_is_ignored() {
        for field in ["false", "0", "\"\"", "null"] {
            let temp = TempDir::new().unwrap();
            let manifest = format!(r#"{{"name":"pkg","radbuild":{}}}"#, field);
            fs::write(temp.path().join("package.json"), manifest).unwrap();
            assert_eq!(discover_config_file(&root(&temp), None), None, "radbuild: {}", field);
        }
    }

    #[test]
    fn test_manifest_field_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name":"pkg","radbuild":{"minify":true}}"#,
        )
        .unwrap();
        let found = discover_config_file(&root(&temp), None).unwrap();
        assert_eq!(found.file_name(), Some("package.json"));
    }

    #[test]
    fn test_unparseable_manifest_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ not json").unwrap();
        assert_eq!(discover_config_file(&root(&temp), None), None);
    }

    #[test]
    fn test_missing_explicit_path_does_not_fall_through() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tsup.config.ts"), "export default {}").unwrap();
        assert_eq!(discover_config_file(&root(&temp), Some("custom.json")), None);
    }
}
