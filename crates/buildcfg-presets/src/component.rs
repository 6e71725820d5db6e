//! Presets for UI component libraries

use crate::preset::{BundlerAffinity, PresetCategory, PresetConfig};
use serde_json::json;

pub(crate) fn presets() -> Vec<PresetConfig> {
    let component = |name, description, bundler| {
        PresetConfig::new(name, description, bundler, PresetCategory::Component)
    };

    vec![
        component(
            "react-component",
            "React component library",
            BundlerAffinity::Both,
        )
        .with_tsup(json!({
            "entry": ["src/index.ts"],
            "format": ["esm", "cjs"],
            "target": "es2020",
            "platform": "browser",
            "dts": { "resolve": true },
            "external": ["react", "react-dom"],
            "sourcemap": true,
            "clean": true,
            "splitting": false,
        }))
        .with_unbuild(json!({
            "entries": [
                "src/index",
                { "builder": "mkdist", "input": "src/components/", "outDir": "dist/components/" },
            ],
            "externals": ["react", "react-dom"],
            "rollup": { "emitCJS": true },
        })),
        component(
            "vue-component",
            "Vue component library",
            BundlerAffinity::Unbuild,
        )
        .with_unbuild(json!({
            "entries": [
                "src/index",
                { "builder": "mkdist", "input": "src/components/", "outDir": "dist/components/" },
            ],
            "externals": ["vue"],
            "rollup": { "emitCJS": false },
        })),
        component(
            "web-component",
            "Framework-agnostic web components",
            BundlerAffinity::Tsup,
        )
        .with_tsup(json!({
            "entry": ["src/index.ts"],
            "format": ["esm", "iife"],
            "target": "es2020",
            "platform": "browser",
            "dts": { "resolve": true },
            "globalName": "WebComponents",
            "minify": true,
            "sourcemap": true,
        })),
        component(
            "design-system",
            "Design system with components and tokens",
            BundlerAffinity::Unbuild,
        )
        .with_unbuild(json!({
            "entries": [
                "src/index",
                { "builder": "mkdist", "input": "src/components/", "outDir": "dist/components/" },
                { "builder": "mkdist", "input": "src/tokens/", "outDir": "dist/tokens/" },
            ],
            "rollup": { "emitCJS": true },
            "declaration": "compatible",
        })),
    ]
}
