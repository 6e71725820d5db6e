//! Shared test utilities for the build-configs workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] builder for a throwaway package directory

pub mod project;

pub use project::TestProject;
