//! Presets for publishing npm packages

use crate::preset::{BundlerAffinity, PresetCategory, PresetConfig};
use serde_json::json;

pub(crate) fn presets() -> Vec<PresetConfig> {
    let library = |name, description, bundler| {
        PresetConfig::new(name, description, bundler, PresetCategory::Library)
    };

    vec![
        library("library-esm", "Modern ESM-only library", BundlerAffinity::Both)
            .with_tsup(json!({
                "format": ["esm"],
                "target": "es2022",
                "dts": { "resolve": true },
            }))
            .with_unbuild(json!({
                "rollup": { "emitCJS": false },
            })),
        library(
            "library-dual",
            "Library with both ESM and CJS outputs",
            BundlerAffinity::Both,
        )
        .with_tsup(json!({
            "format": ["esm", "cjs"],
            "target": "node18",
            "dts": { "resolve": true },
        }))
        .with_unbuild(json!({
            "rollup": { "emitCJS": true },
            "declaration": "compatible",
        })),
        library(
            "library-browser",
            "Browser-compatible library",
            BundlerAffinity::Tsup,
        )
        .with_tsup(json!({
            "format": ["esm", "cjs", "iife"],
            "platform": "browser",
            "target": "es2020",
            "globalName": "MyLib",
            "dts": { "resolve": true },
            "minify": true,
        })),
        library(
            "library-unbundled",
            "Library with file-to-file transpilation (mkdist)",
            BundlerAffinity::Unbuild,
        )
        .with_unbuild(json!({
            "entries": [
                "src/index",
                { "builder": "mkdist", "input": "src/", "outDir": "dist/" },
            ],
        })),
        library(
            "library-monorepo",
            "Optimized for monorepo internal packages",
            BundlerAffinity::Both,
        )
        .with_tsup(json!({
            "format": ["esm"],
            "dts": true,
            "sourcemap": true,
            "clean": true,
            "skipNodeModulesBundle": true,
        }))
        .with_unbuild(json!({
            "rollup": { "emitCJS": false, "inlineDependencies": false },
            "sourcemap": true,
        })),
    ]
}
