//! Preset record types

use crate::{Error, Result};
use buildcfg_meta::Bundler;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Which bundlers a preset carries configuration for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BundlerAffinity {
    Tsup,
    Unbuild,
    Both,
}

impl BundlerAffinity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tsup => "tsup",
            Self::Unbuild => "unbuild",
            Self::Both => "both",
        }
    }

    /// Whether this affinity covers `bundler`.
    pub fn includes(&self, bundler: Bundler) -> bool {
        matches!(
            (self, bundler),
            (Self::Both, _) | (Self::Tsup, Bundler::Tsup) | (Self::Unbuild, Bundler::Unbuild)
        )
    }
}

impl fmt::Display for BundlerAffinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping used when listing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Library,
    Cli,
    Component,
    Complete,
}

impl PresetCategory {
    /// All categories in listing order.
    pub const ALL: [PresetCategory; 4] = [
        PresetCategory::Library,
        PresetCategory::Cli,
        PresetCategory::Component,
        PresetCategory::Complete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Cli => "cli",
            Self::Component => "component",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// A named partial configuration for one or both bundlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetConfig {
    pub name: String,
    pub description: String,
    pub bundler: BundlerAffinity,
    pub category: PresetCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsup: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unbuild: Option<Value>,
}

impl PresetConfig {
    pub(crate) fn new(
        name: &str,
        description: &str,
        bundler: BundlerAffinity,
        category: PresetCategory,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            bundler,
            category,
            tsup: None,
            unbuild: None,
        }
    }

    pub(crate) fn with_tsup(mut self, config: Value) -> Self {
        self.tsup = Some(config);
        self
    }

    pub(crate) fn with_unbuild(mut self, config: Value) -> Self {
        self.unbuild = Some(config);
        self
    }

    /// Whether the preset is meant to be used with `bundler`.
    pub fn supports(&self, bundler: Bundler) -> bool {
        self.bundler.includes(bundler)
    }

    /// Partial config for `bundler`, or an empty object when the preset has none.
    pub fn config_for(&self, bundler: Bundler) -> Value {
        let config = match bundler {
            Bundler::Tsup => self.tsup.as_ref(),
            Bundler::Unbuild => self.unbuild.as_ref(),
        };
        config
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_for_missing_bundler_is_empty_object() {
        let preset = PresetConfig::new(
            "x",
            "tsup only",
            BundlerAffinity::Tsup,
            PresetCategory::Library,
        )
        .with_tsup(json!({ "format": ["esm"] }));

        assert_eq!(preset.config_for(Bundler::Tsup), json!({ "format": ["esm"] }));
        assert_eq!(preset.config_for(Bundler::Unbuild), json!({}));
    }

    #[test]
    fn test_affinity_includes() {
        assert!(BundlerAffinity::Both.includes(Bundler::Tsup));
        assert!(BundlerAffinity::Both.includes(Bundler::Unbuild));
        assert!(BundlerAffinity::Tsup.includes(Bundler::Tsup));
        assert!(!BundlerAffinity::Tsup.includes(Bundler::Unbuild));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("CLI".parse::<PresetCategory>().unwrap(), PresetCategory::Cli);
        assert!("app".parse::<PresetCategory>().is_err());
    }
}
