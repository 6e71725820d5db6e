//! Error types for buildcfg-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from buildcfg-core
    #[error(transparent)]
    Core(#[from] buildcfg_core::Error),

    /// Error from buildcfg-presets
    #[error(transparent)]
    Presets(#[from] buildcfg_presets::Error),

    /// Error from buildcfg-fs
    #[error(transparent)]
    Fs(#[from] buildcfg_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
