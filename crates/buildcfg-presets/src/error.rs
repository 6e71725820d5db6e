//! Error types for buildcfg-presets

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Preset '{name}' not found. Available presets: {available}")]
    NotFound { name: String, available: String },

    #[error("Unknown preset category '{name}'. Expected one of: library, cli, component, complete")]
    UnknownCategory { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_available() {
        let err = Error::NotFound {
            name: "library-umd".to_string(),
            available: "library-esm, library-dual".to_string(),
        };
        assert!(err.to_string().contains("library-umd"));
        assert!(err.to_string().contains("library-dual"));
    }
}
