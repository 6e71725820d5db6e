//! Bundler metadata and configuration schemas for build-configs.
//!
//! This crate defines the two supported bundlers, the JSON encoding used for
//! JavaScript regular expressions, and the permissive schema validator that
//! type-checks recognized bundler options.

pub mod bundler;
pub mod error;
pub mod pattern;
pub mod validation;

pub use bundler::{Bundler, BundlerChoice};
pub use error::{Error, Result};
pub use validation::{FieldError, ValidationReport, validate, validate_tsup, validate_unbuild};
