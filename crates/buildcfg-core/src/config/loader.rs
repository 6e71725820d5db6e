//! Config loading
//!
//! JSON sources are parsed directly. JavaScript and TypeScript modules are
//! handed to a [`ModuleEvaluator`], which returns the module's default
//! export as JSON.

use crate::{Error, Result};
use async_trait::async_trait;
use buildcfg_fs::{NormalizedPath, io};
use serde_json::Value;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

use super::discovery::MANIFEST_FIELD;

/// Evaluates a config module and returns its default export.
///
/// `RegExp` values in the export must come back as pattern values
/// (see [`buildcfg_meta::pattern`]).
#[async_trait]
pub trait ModuleEvaluator: Send + Sync {
    async fn evaluate(&self, root: &NormalizedPath, path: &NormalizedPath) -> Result<Value>;
}

/// Inline ES module run by `node` to evaluate a config file.
///
/// Uses the project's `jiti` when it resolves (TypeScript sources) and
/// native `import()` otherwise. Functions are dropped from the output.
const EVALUATE_SCRIPT: &str = r#"
import { createRequire } from "node:module";
import { pathToFileURL } from "node:url";

const file = process.argv[1];
const require = createRequire(pathToFileURL(process.cwd() + "/").href);

let jitiPath = null;
try {
    jitiPath = require.resolve("jiti");
} catch {}

let config;
if (jitiPath) {
    const jitiModule = await import(pathToFileURL(jitiPath).href);
    const createJiti = jitiModule.createJiti ?? jitiModule.default;
    const jiti = createJiti(process.cwd() + "/", { interopDefault: true });
    config = await jiti.import(file, { default: true });
} else {
    const mod = await import(pathToFileURL(file).href);
    config = mod.default ?? mod;
}

const json = JSON.stringify(config, (_key, value) => {
    if (value instanceof RegExp) return { regex: value.source, flags: value.flags };
    if (typeof value === "function") return undefined;
    return value;
});
process.stdout.write(json ?? "null");
"#;

/// Evaluates config modules by running `node`.
#[derive(Debug, Clone)]
pub struct NodeEvaluator {
    node: String,
}

impl NodeEvaluator {
    pub fn new() -> Self {
        Self {
            node: "node".to_string(),
        }
    }
}

impl Default for NodeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleEvaluator for NodeEvaluator {
    async fn evaluate(&self, root: &NormalizedPath, path: &NormalizedPath) -> Result<Value> {
        tracing::debug!(path = %path, "Evaluating config module with node");

        let output = Command::new(&self.node)
            .current_dir(root.to_native())
            .arg("--input-type=module")
            .arg("-e")
            .arg(EVALUATE_SCRIPT)
            .arg(path.to_native())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(Error::NodeUnavailable)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Evaluation {
                path: path.clone(),
                message: stderr.trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| Error::Evaluation {
            path: path.clone(),
            message: format!("default export is not serializable: {}", e),
        })
    }
}

/// Loads config sources from files.
#[derive(Clone)]
pub struct ConfigLoader {
    root: NormalizedPath,
    evaluator: Arc<dyn ModuleEvaluator>,
}

impl ConfigLoader {
    /// Create a loader that evaluates modules with [`NodeEvaluator`].
    pub fn new(root: NormalizedPath) -> Self {
        Self::with_evaluator(root, Arc::new(NodeEvaluator::new()))
    }

    pub fn with_evaluator(root: NormalizedPath, evaluator: Arc<dyn ModuleEvaluator>) -> Self {
        Self { root, evaluator }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Read a config source without normalizing its shape.
    ///
    /// `package.json` yields its `radbuild` field, `None` when absent.
    /// Module configs may come back as arrays (multi-build unbuild configs).
    pub async fn try_load_raw(&self, path: &NormalizedPath) -> Result<Option<Value>> {
        if path.file_name() == Some("package.json") {
            let pkg: Value = parse_json(path, &io::read_text(path)?)?;
            return Ok(pkg.get(MANIFEST_FIELD).filter(|v| !v.is_null()).cloned());
        }

        if path.extension() == Some("json") {
            let value = parse_json(path, &io::read_text(path)?)?;
            return Ok(Some(value));
        }

        self.evaluator.evaluate(&self.root, path).await.map(Some)
    }

    /// Read a config source as a single object.
    ///
    /// An array is reduced to its first element; anything else that is not
    /// an object is an error.
    pub async fn try_load(&self, path: &NormalizedPath) -> Result<Option<Value>> {
        let Some(value) = self.try_load_raw(path).await? else {
            return Ok(None);
        };

        let value = match value {
            Value::Array(items) => {
                tracing::debug!(path = %path, count = items.len(), "Using first of multiple configs");
                items.into_iter().next().unwrap_or(Value::Null)
            }
            other => other,
        };

        if value.is_object() {
            Ok(Some(value))
        } else {
            Err(Error::InvalidConfig {
                path: path.clone(),
                found: kind_of(&value).to_string(),
            })
        }
    }

    /// Read a config source, logging failures instead of returning them.
    pub async fn load(&self, path: &NormalizedPath) -> Option<Value> {
        match self.try_load(path).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to load config");
                None
            }
        }
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

fn parse_json(path: &NormalizedPath, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| Error::Parse {
        path: path.clone(),
        source,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    /// Serves canned default exports keyed by file name.
    struct FakeEvaluator(HashMap<&'static str, Value>);

    #[async_trait]
    impl ModuleEvaluator for FakeEvaluator {
        async fn evaluate(&self, _root: &NormalizedPath, path: &NormalizedPath) -> Result<Value> {
            let name = path.file_name().unwrap_or_default();
            self.0.get(name).cloned().ok_or_else(|| Error::Evaluation {
                path: path.clone(),
                message: "SyntaxError: Unexpected token".to_string(),
            })
        }
    }

    fn loader(temp: &TempDir, modules: &[(&'static str, Value)]) -> ConfigLoader {
        let evaluator = FakeEvaluator(modules.iter().cloned().collect());
        ConfigLoader::with_evaluator(NormalizedPath::new(temp.path()), Arc::new(evaluator))
    }

    #[tokio::test]
    async fn test_array_reduces_to_first_element() {
        let temp = TempDir::new().unwrap();
        let loader = loader(
            &temp,
            &[(
                "build.config.ts",
                json!([{ "entries": ["src/a"] }, { "entries": ["src/b"] }]),
            )],
        );
        let path = loader.root().join("build.config.ts");

        assert_eq!(
            loader.try_load(&path).await.unwrap(),
            Some(json!({ "entries": ["src/a"] }))
        );
    }

    #[tokio::test]
    async fn test_non_object_is_invalid() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".radbuildrc.json"), r#""esm""#).unwrap();
        let loader = loader(&temp, &[]);
        let path = loader.root().join(".radbuildrc.json");

        let err = loader.try_load(&path).await.unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
        assert_eq!(loader.load(&path).await, None);
    }

    #[tokio::test]
    async fn test_parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".radbuildrc.json"), "{ broken").unwrap();
        let loader = loader(&temp, &[]);
        let path = loader.root().join(".radbuildrc.json");

        let err = loader.try_load(&path).await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains(".radbuildrc.json"));
        assert_eq!(loader.load(&path).await, None);
    }

    #[tokio::test]
    async fn test_evaluation_failure_is_swallowed_by_load() {
        let temp = TempDir::new().unwrap();
        let loader = loader(&temp, &[]);
        let path = loader.root().join("tsup.config.ts");

        assert!(loader.try_load(&path).await.is_err());
        assert_eq!(loader.load(&path).await, None);
    }
}
