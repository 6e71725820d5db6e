//! Error types for buildcfg-core

use buildcfg_fs::NormalizedPath;

/// Result type for buildcfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in buildcfg-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A config module could not be evaluated
    #[error("Failed to evaluate {path}: {message}")]
    Evaluation {
        path: NormalizedPath,
        message: String,
    },

    /// A config source evaluated to something other than an object
    #[error("Config in {path} must be an object, found {found}")]
    InvalidConfig { path: NormalizedPath, found: String },

    /// A JSON config source is not valid JSON
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: NormalizedPath,
        #[source]
        source: serde_json::Error,
    },

    /// `node` could not be started to evaluate a config module
    #[error("Could not start node to evaluate config modules: {0}")]
    NodeUnavailable(#[source] std::io::Error),

    /// The bundler executable could not be started
    #[error("Could not start {tool}: {source}")]
    BundlerSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The bundler exited unsuccessfully
    #[error("{tool} exited with {}", exit_description(.code))]
    BundlerFailed { tool: String, code: Option<i32> },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from buildcfg-fs
    #[error(transparent)]
    Fs(#[from] buildcfg_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundler_failed_display() {
        let err = Error::BundlerFailed {
            tool: "tsup".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "tsup exited with exit code 2");

        let err = Error::BundlerFailed {
            tool: "unbuild".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "unbuild exited with a signal");
    }

    #[test]
    fn test_invalid_config_display() {
        let err = Error::InvalidConfig {
            path: NormalizedPath::new("/p/.radbuildrc.json"),
            found: "string".to_string(),
        };
        assert!(err.to_string().contains(".radbuildrc.json"));
    }
}
