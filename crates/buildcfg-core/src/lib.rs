//! Core layer of build-configs.
//!
//! Turns layered configuration sources into a single bundler config and
//! hands it to the bundler:
//!
//! - [`config`] discovers, loads and merges project config, presets and
//!   command-line flags, and guesses the bundler a project uses
//! - [`defaults`] overlays a partial config onto each bundler's baseline
//! - [`package`] reads and updates `package.json` and renders starter configs
//! - [`module`] renders a config as an ES module
//! - [`runner`] writes the transient config module and runs the bundler

pub mod config;
pub mod defaults;
pub mod error;
pub mod module;
pub mod package;
pub mod runner;

pub use config::{
    ConfigLoader, ConfigResolver, ModuleEvaluator, NodeEvaluator, ResolveOptions, ResolvedConfig,
};
pub use defaults::{BuildConfigInput, define_build_config, make_tsup_config, make_unbuild_config};
pub use error::{Error, Result};
pub use runner::{BundlerRunner, RunOptions};
