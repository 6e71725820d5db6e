//! Filesystem helpers for build-configs
//!
//! Provides normalized path handling and safe write/remove operations used
//! when reading project configs, updating `package.json` and writing the
//! transient bundler config module.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
