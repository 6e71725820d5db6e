//! Presets for command-line tools

use crate::preset::{BundlerAffinity, PresetCategory, PresetConfig};
use buildcfg_meta::pattern::pattern;
use serde_json::json;

pub(crate) fn presets() -> Vec<PresetConfig> {
    let cli = |name, description, bundler| {
        PresetConfig::new(name, description, bundler, PresetCategory::Cli)
    };

    vec![
        // CLIs ship no type definitions; shims keep the single ESM output usable from CJS
        cli(
            "cli-simple",
            "Simple CLI tool with single entry point",
            BundlerAffinity::Both,
        )
        .with_tsup(json!({
            "entry": ["src/cli.ts"],
            "format": ["esm"],
            "target": "node18",
            "platform": "node",
            "dts": false,
            "clean": true,
            "minify": false,
            "shims": true,
        }))
        .with_unbuild(json!({
            "entries": ["src/cli"],
            "declaration": false,
            "rollup": { "emitCJS": false },
        })),
        cli(
            "cli-multi",
            "CLI tool with multiple commands",
            BundlerAffinity::Both,
        )
        .with_tsup(json!({
            "entry": { "cli": "src/cli.ts", "index": "src/index.ts" },
            "format": ["esm", "cjs"],
            "target": "node18",
            "platform": "node",
            "dts": true,
            "clean": true,
            "splitting": false,
        }))
        .with_unbuild(json!({
            "entries": ["src/cli", "src/index"],
            "declaration": true,
            "rollup": { "emitCJS": true },
        })),
        cli(
            "cli-bundled",
            "CLI tool with all dependencies bundled",
            BundlerAffinity::Tsup,
        )
        .with_tsup(json!({
            "entry": ["src/cli.ts"],
            "format": ["esm"],
            "target": "node18",
            "platform": "node",
            "dts": false,
            "bundle": true,
            "skipNodeModulesBundle": false,
            "noExternal": [pattern(".*")],
            "minify": true,
            "treeshake": true,
        })),
    ]
}
