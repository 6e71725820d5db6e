//! Layered config resolution
//!
//! The `ConfigResolver` picks the bundler, gathers the preset and project
//! config for it, and merges them under the command-line flags.

use buildcfg_fs::NormalizedPath;
use buildcfg_meta::{Bundler, BundlerChoice};
use buildcfg_presets::PresetRegistry;
use serde_json::{Map, Value};
use std::sync::Arc;

use super::detect::detect_bundler;
use super::discovery::discover_config_file;
use super::loader::{ConfigLoader, ModuleEvaluator};
use super::merge::merge_layers;
use crate::defaults;

/// Bundler used when neither a hint nor detection settles it.
pub const FALLBACK_BUNDLER: Bundler = Bundler::Unbuild;

/// Inputs to a single resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Explicit config file, relative to the project root
    pub config_path: Option<String>,
    /// Preset name
    pub preset: Option<String>,
    pub bundler: BundlerChoice,
    /// Config object built from command-line flags; highest precedence
    pub cli_flags: Value,
}

/// The merged configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Merged user-facing config, before bundler defaults
    pub config: Value,
    pub bundler: Bundler,
    /// Project config source, if one was found
    pub config_path: Option<NormalizedPath>,
}

impl ResolvedConfig {
    /// The config with the bundler's baseline defaults applied.
    pub fn native_config(&self) -> Value {
        defaults::make_config(self.bundler, &self.config)
    }
}

/// Resolves the effective bundler config for a project.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    root: NormalizedPath,
    loader: ConfigLoader,
    presets: PresetRegistry,
}

impl ConfigResolver {
    /// Create a resolver for the project at `root` with the built-in presets.
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            loader: ConfigLoader::new(root.clone()),
            presets: PresetRegistry::with_builtins(),
            root,
        }
    }

    /// Evaluate config modules with `evaluator` instead of `node`.
    pub fn with_evaluator(mut self, evaluator: Arc<dyn ModuleEvaluator>) -> Self {
        self.loader = ConfigLoader::with_evaluator(self.root.clone(), evaluator);
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Find the project config file, honoring an explicit path.
    pub fn discover(&self, explicit: Option<&str>) -> Option<NormalizedPath> {
        discover_config_file(&self.root, explicit)
    }

    /// Choose the bundler: the explicit hint, else detection, else unbuild.
    pub async fn select_bundler(&self, choice: BundlerChoice) -> Bundler {
        if let Some(bundler) = choice.bundler() {
            return bundler;
        }
        match detect_bundler(&self.root, &self.loader).await {
            Some(bundler) => bundler,
            None => {
                tracing::debug!(fallback = %FALLBACK_BUNDLER, "No bundler detected");
                FALLBACK_BUNDLER
            }
        }
    }

    /// Resolve the configuration for `options`.
    ///
    /// Missing or broken sources contribute nothing; resolution itself
    /// never fails.
    pub async fn resolve(&self, options: &ResolveOptions) -> ResolvedConfig {
        let bundler = self.select_bundler(options.bundler).await;

        let preset_config = match options.preset.as_deref() {
            Some(name) => match self.presets.get(name) {
                Some(preset) => {
                    tracing::info!(preset = %preset.name, "Using preset");
                    preset.config_for(bundler)
                }
                None => {
                    tracing::warn!(preset = name, "Preset not found");
                    empty_object()
                }
            },
            None => empty_object(),
        };

        let config_path = self.discover(options.config_path.as_deref());
        let project_config = match &config_path {
            Some(path) => match self.loader.load(path).await {
                Some(config) => {
                    tracing::info!(path = %path, "Loaded project config");
                    config
                }
                None => empty_object(),
            },
            None => empty_object(),
        };

        let config = merge_layers([
            &options.cli_flags,
            &project_config,
            &preset_config,
            &empty_object(),
        ]);

        ResolvedConfig {
            config,
            bundler,
            config_path,
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
