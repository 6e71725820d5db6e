//! Preset registry
//!
//! Maps preset names to their definitions, preserving the order in which
//! presets were registered so listings stay stable.

use crate::preset::{PresetCategory, PresetConfig};
use crate::{Error, Result, cli, complete, component, library};
use buildcfg_meta::Bundler;

/// Ordered collection of presets looked up by exact name.
///
/// # Example
///
/// ```
/// use buildcfg_presets::PresetRegistry;
///
/// let registry = PresetRegistry::with_builtins();
/// assert!(registry.get("library-dual").is_some());
/// assert!(registry.get("library-umd").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: Vec<PresetConfig>,
}

impl PresetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// Create a registry holding the built-in catalogue.
    ///
    /// Listing order is library, cli, component, then complete presets.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for preset in library::presets()
            .into_iter()
            .chain(cli::presets())
            .chain(component::presets())
            .chain(complete::presets())
        {
            registry.register(preset);
        }
        registry
    }

    /// Register a preset. A preset with the same name is replaced in place.
    pub fn register(&mut self, preset: PresetConfig) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Like [`get`](Self::get), but an unknown name is an error listing what exists.
    pub fn require(&self, name: &str) -> Result<&PresetConfig> {
        self.get(name).ok_or_else(|| Error::NotFound {
            name: name.to_string(),
            available: self.list().join(", "),
        })
    }

    /// Names of all presets in listing order.
    pub fn list(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PresetConfig> {
        self.presets.iter()
    }

    /// Presets usable with `bundler`, including those with affinity `both`.
    pub fn by_bundler(&self, bundler: Bundler) -> Vec<&PresetConfig> {
        self.presets.iter().filter(|p| p.supports(bundler)).collect()
    }

    pub fn by_category(&self, category: PresetCategory) -> Vec<&PresetConfig> {
        self.presets
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Categories paired with their presets, in listing order.
    ///
    /// Categories without presets are left out.
    pub fn categories(&self) -> Vec<(PresetCategory, Vec<&PresetConfig>)> {
        PresetCategory::ALL
            .into_iter()
            .map(|category| (category, self.by_category(category)))
            .filter(|(_, presets)| !presets.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
