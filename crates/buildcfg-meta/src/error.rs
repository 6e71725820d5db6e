//! Error types for buildcfg-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown bundler '{name}'. Expected one of: {expected}")]
    UnknownBundler { name: String, expected: String },
}
