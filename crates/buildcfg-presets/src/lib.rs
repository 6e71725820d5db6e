//! Built-in presets for build-configs.
//!
//! A preset is a named, pre-authored partial bundler configuration. It is
//! one of the merge inputs of config resolution, ranked below the project
//! config file and above nothing.

mod cli;
mod complete;
mod component;
pub mod error;
mod library;
pub mod preset;
pub mod registry;

pub use error::{Error, Result};
pub use preset::{BundlerAffinity, PresetCategory, PresetConfig};
pub use registry::PresetRegistry;
