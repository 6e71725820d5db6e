//! Reference presets that spell out every option
//!
//! These double as documentation of the option surface and as starting
//! points for hand-written configs.

use crate::preset::{BundlerAffinity, PresetCategory, PresetConfig};
use buildcfg_meta::pattern::pattern;
use serde_json::{Map, Value, json};

pub(crate) fn presets() -> Vec<PresetConfig> {
    let complete = |name, description, bundler| {
        PresetConfig::new(name, description, bundler, PresetCategory::Complete)
    };

    vec![
        complete(
            "complete-tsup",
            "Complete tsup config with all options defined",
            BundlerAffinity::Tsup,
        )
        .with_tsup(complete_tsup()),
        complete(
            "complete-unbuild",
            "Complete unbuild config with all options defined",
            BundlerAffinity::Unbuild,
        )
        .with_unbuild(complete_unbuild()),
        complete(
            "complete-tsup-full",
            "Exhaustive tsup config with every possible option",
            BundlerAffinity::Tsup,
        )
        .with_tsup(complete_tsup_full()),
        complete(
            "complete-unbuild-full",
            "Exhaustive unbuild config with every possible option",
            BundlerAffinity::Unbuild,
        )
        .with_unbuild(complete_unbuild_full()),
    ]
}

/// Join several object literals into one, keeping key order.
fn sections(parts: Vec<Value>) -> Value {
    let mut merged = Map::new();
    for part in parts {
        if let Value::Object(map) = part {
            merged.extend(map);
        }
    }
    Value::Object(merged)
}

fn complete_tsup() -> Value {
    sections(vec![
        json!({
            "entry": ["src/index.ts"],
            "outDir": "dist",
            "format": ["esm", "cjs"],
            "legacyOutput": false,
            "target": "node18",
            "platform": "node",
            "dts": {
                "resolve": true,
                "only": false,
                "compilerOptions": { "strict": true },
            },
            "sourcemap": true,
        }),
        json!({
            "bundle": true,
            "splitting": false,
            "skipNodeModulesBundle": true,
            "minify": false,
            "minifyWhitespace": false,
            "minifyIdentifiers": false,
            "minifySyntax": false,
            "keepNames": true,
            "treeshake": true,
        }),
        json!({
            "clean": true,
            "watch": false,
            "silent": false,
            "external": [pattern("node_modules")],
            "noExternal": [],
            "shims": false,
            "cjsInterop": false,
            "replaceNodeEnv": false,
            "removeNodeProtocol": true,
            "metafile": false,
            "publicDir": false,
        }),
    ])
}

fn complete_unbuild() -> Value {
    sections(vec![
        json!({
            "entries": ["src/index"],
            "outDir": "dist",
            "clean": true,
            "stub": false,
            "watch": false,
            "parallel": true,
            "declaration": "compatible",
            "sourcemap": true,
            "failOnWarn": false,
            "externals": [],
            "alias": {},
            "replace": {},
        }),
        json!({
            "rollup": {
                "emitCJS": false,
                "cjsBridge": false,
                "inlineDependencies": false,
                "preserveDynamicImports": false,
                "esbuild": {
                    "target": "node18",
                    "minify": false,
                    "tsconfigRaw": {
                        "compilerOptions": { "strict": true, "experimentalDecorators": false },
                    },
                },
                "replace": {},
                "alias": {},
                "resolve": { "extensions": [".mjs", ".js", ".json", ".ts"] },
                "json": {},
                "commonjs": { "requireReturnsDefault": "auto" },
            },
            "stubOptions": {
                "jiti": { "interopDefault": true },
            },
        }),
    ])
}

fn complete_tsup_full() -> Value {
    sections(vec![
        json!({
            "entry": ["src/index.ts"],
            "outDir": "dist",
            "format": ["esm", "cjs", "iife"],
            "legacyOutput": false,
            "globalName": "MyLib",
            "target": ["es2020", "node18"],
            "platform": "neutral",
            "dts": {
                "resolve": true,
                "only": false,
                "banner": "// TypeScript declarations",
                "footer": "// End of declarations",
                "compilerOptions": { "strict": true, "skipLibCheck": true },
            },
            "sourcemap": true,
        }),
        json!({
            "bundle": true,
            "splitting": true,
            "skipNodeModulesBundle": false,
            "minify": "terser",
            "terserOptions": {
                "compress": { "drop_console": false, "drop_debugger": true },
                "mangle": { "keep_classnames": true, "keep_fnames": true },
            },
            "minifyWhitespace": true,
            "minifyIdentifiers": true,
            "minifySyntax": true,
            "keepNames": false,
            "treeshake": "recommended",
        }),
        json!({
            "clean": ["dist/**/*"],
            "watch": false,
            "ignoreWatch": ["**/__tests__/**", "**/*.test.ts"],
            "silent": false,
            "external": [pattern("^node:"), pattern("^@types\\/")],
            "noExternal": ["some-package"],
        }),
        // `define` values are source text, hence the embedded quotes
        json!({
            "define": {
                "__VERSION__": "\"1.0.0\"",
                "process.env.NODE_ENV": "\"production\"",
            },
            "env": { "NODE_ENV": "production" },
            "inject": [],
            "banner": { "js": "/* My Library Banner */" },
            "footer": { "js": "/* End of Library */" },
            "shims": true,
            "cjsInterop": true,
            "replaceNodeEnv": true,
            "removeNodeProtocol": false,
        }),
        json!({
            "tsconfig": "tsconfig.build.json",
            "metafile": true,
            "publicDir": "public",
            "pure": ["console.log"],
            "loader": { ".txt": "text", ".png": "base64" },
            "injectStyle": false,
            "jsxFactory": "React.createElement",
            "jsxFragment": "React.Fragment",
        }),
    ])
}

fn complete_unbuild_full() -> Value {
    sections(vec![
        json!({
            "name": "my-package",
            "rootDir": ".",
            "entries": [
                "src/index",
                { "builder": "rollup", "input": "src/main", "name": "main" },
                {
                    "builder": "mkdist",
                    "input": "src/components/",
                    "outDir": "dist/components/",
                    "format": "esm",
                    "ext": "mjs",
                },
            ],
            "outDir": "dist",
            "clean": true,
            "stub": false,
            "watch": false,
            "watchOptions": { "exclude": ["node_modules/**", "dist/**"] },
            "parallel": true,
            "declaration": "node16",
            "sourcemap": true,
            "failOnWarn": false,
        }),
        json!({
            "externals": [pattern("^node:"), "external-pkg"],
            "dependencies": [],
            "peerDependencies": [],
            "devDependencies": [],
            "alias": { "@": "./src", "@utils": "./src/utils" },
            "replace": {
                "__VERSION__": "1.0.0",
                "process.env.NODE_ENV": "production",
            },
        }),
        json!({ "rollup": full_rollup_options() }),
        json!({
            "stubOptions": {
                "jiti": {
                    "interopDefault": true,
                    "cache": true,
                    "requireCache": false,
                    "transformOptions": {},
                },
                "absoluteJitiPath": false,
            },
        }),
    ])
}

fn full_rollup_options() -> Value {
    sections(vec![
        json!({
            "emitCJS": true,
            "cjsBridge": true,
            "inlineDependencies": false,
            "preserveDynamicImports": false,
            "watch": false,
            "output": {
                "banner": "/* My Library */",
                "footer": "/* End */",
                "exports": "auto",
                "interop": "auto",
            },
            "esbuild": {
                "target": "es2020",
                "minify": true,
                "minifyWhitespace": true,
                "minifyIdentifiers": true,
                "minifySyntax": true,
                "tsconfigRaw": {
                    "compilerOptions": { "strict": true, "experimentalDecorators": true },
                },
            },
        }),
        json!({
            "replace": {
                "preventAssignment": true,
                "values": { "process.env.NODE_ENV": "\"production\"" },
            },
            "alias": {
                "entries": [{ "find": "@", "replacement": "./src" }],
            },
            "resolve": {
                "extensions": [".mjs", ".js", ".json", ".ts"],
                "browser": false,
                "preferBuiltins": true,
            },
            "json": { "compact": false, "namedExports": true, "preferConst": true },
            "commonjs": {
                "include": pattern("node_modules"),
                "requireReturnsDefault": "auto",
                "esmExternals": true,
                "transformMixedEsModules": true,
            },
            "dts": { "respectExternal": true },
        }),
    ])
}
