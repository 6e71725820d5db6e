//! Command implementations for buildcfg-cli

pub mod build;
pub mod info;
pub mod init;
pub mod list;
pub mod validate;

pub use build::{run_build, run_watch};
pub use info::run_info;
pub use init::{InitOptions, run_init};
pub use list::run_list_presets;
pub use validate::run_validate;
