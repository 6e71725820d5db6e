//! Baseline bundler configs
//!
//! Each builder overlays a caller's partial config onto a fixed baseline.
//! Caller keys replace baseline keys at the top level; nested objects are
//! not merged, except for unbuild's `rollup` block.

use buildcfg_meta::Bundler;
use buildcfg_meta::pattern::pattern;
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Baseline tsup config: dual ESM/CJS output for Node 18 with declarations.
pub fn tsup_baseline() -> Value {
    json!({
        "entry": ["src/index.ts"],
        "format": ["esm", "cjs"],
        "dts": {
            "resolve": true,
            "compilerOptions": { "strict": true },
        },
        "bundle": true,
        "splitting": false,
        "treeshake": true,
        "clean": true,
        "sourcemap": true,
        "target": "node18",
        "platform": "node",
        "minify": false,
        "keepNames": true,
        "skipNodeModulesBundle": true,
        "external": [pattern("node_modules")],
    })
}

/// Baseline unbuild config: ESM-only output with compatible declarations.
pub fn unbuild_baseline() -> Value {
    json!({
        "entries": ["src/index"],
        "outDir": "dist",
        "declaration": "compatible",
        "sourcemap": true,
        "clean": true,
        "parallel": true,
        "failOnWarn": false,
        "rollup": {
            "emitCJS": false,
            "inlineDependencies": false,
            "esbuild": { "target": "node18", "minify": false },
        },
    })
}

/// Overlay `overrides` onto the tsup baseline.
pub fn make_tsup_config(overrides: &Value) -> Value {
    overlay(tsup_baseline(), overrides)
}

/// Overlay `overrides` onto the unbuild baseline.
///
/// A caller `rollup` object is first merged key by key into the baseline
/// `rollup`, so setting `rollup.emitCJS` keeps the baseline esbuild options.
pub fn make_unbuild_config(overrides: &Value) -> Value {
    let mut baseline = unbuild_baseline();

    if let (Some(Value::Object(base_rollup)), Some(Value::Object(rollup))) =
        (baseline.get_mut("rollup"), overrides.get("rollup"))
    {
        for (key, value) in rollup {
            if !value.is_null() {
                base_rollup.insert(key.clone(), value.clone());
            }
        }
    }

    let remaining = match overrides {
        Value::Object(map) => {
            let rollup_merged = map.get("rollup").is_some_and(Value::is_object);
            Value::Object(
                map.iter()
                    .filter(|(key, _)| !(rollup_merged && key.as_str() == "rollup"))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            )
        }
        other => other.clone(),
    };

    overlay(baseline, &remaining)
}

/// Apply the builder for `bundler`.
pub fn make_config(bundler: Bundler, overrides: &Value) -> Value {
    match bundler {
        Bundler::Tsup => make_tsup_config(overrides),
        Bundler::Unbuild => make_unbuild_config(overrides),
    }
}

/// Tagged input for [`define_build_config`].
///
/// ```json
/// { "type": "unbuild", "options": { "entries": ["src/index"] } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BuildConfigInput {
    Tsup {
        #[serde(default)]
        options: Option<Value>,
    },
    Unbuild {
        #[serde(default)]
        options: Option<Value>,
    },
}

impl BuildConfigInput {
    pub fn bundler(&self) -> Bundler {
        match self {
            Self::Tsup { .. } => Bundler::Tsup,
            Self::Unbuild { .. } => Bundler::Unbuild,
        }
    }

    fn options(&self) -> Option<&Value> {
        match self {
            Self::Tsup { options } | Self::Unbuild { options } => options.as_ref(),
        }
    }
}

/// Build a config for whichever bundler `input` names.
pub fn define_build_config(input: &BuildConfigInput) -> Value {
    let empty = Value::Object(Map::new());
    make_config(input.bundler(), input.options().unwrap_or(&empty))
}

fn overlay(mut baseline: Value, overrides: &Value) -> Value {
    if let (Value::Object(base), Value::Object(over)) = (&mut baseline, overrides) {
        for (key, value) in over {
            if !value.is_null() {
                base.insert(key.clone(), value.clone());
            }
        }
    }
    baseline
}
