//! The two supported bundlers

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bundler this tool knows how to configure and run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    Tsup,
    Unbuild,
}

impl Bundler {
    pub const ALL: [Bundler; 2] = [Bundler::Tsup, Bundler::Unbuild];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tsup => "tsup",
            Self::Unbuild => "unbuild",
        }
    }

    /// Name of the executable that runs this bundler.
    pub fn command(&self) -> &'static str {
        self.as_str()
    }

    /// File stem of the bundler's own config file (`tsup.config.ts`, `build.config.ts`).
    pub fn config_stem(&self) -> &'static str {
        match self {
            Self::Tsup => "tsup.config",
            Self::Unbuild => "build.config",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bundler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsup" => Ok(Self::Tsup),
            "unbuild" => Ok(Self::Unbuild),
            other => Err(Error::UnknownBundler {
                name: other.to_string(),
                expected: "tsup, unbuild".to_string(),
            }),
        }
    }
}

/// Bundler requested on the command line.
///
/// `Auto` defers to detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BundlerChoice {
    #[default]
    Auto,
    Tsup,
    Unbuild,
}

impl BundlerChoice {
    /// The explicitly requested bundler, or `None` for `Auto`.
    pub fn bundler(&self) -> Option<Bundler> {
        match self {
            Self::Auto => None,
            Self::Tsup => Some(Bundler::Tsup),
            Self::Unbuild => Some(Bundler::Unbuild),
        }
    }
}

impl From<Bundler> for BundlerChoice {
    fn from(bundler: Bundler) -> Self {
        match bundler {
            Bundler::Tsup => Self::Tsup,
            Bundler::Unbuild => Self::Unbuild,
        }
    }
}

impl From<Option<Bundler>> for BundlerChoice {
    fn from(bundler: Option<Bundler>) -> Self {
        bundler.map(Self::from).unwrap_or_default()
    }
}

impl fmt::Display for BundlerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bundler() {
            Some(bundler) => bundler.fmt(f),
            None => f.write_str("auto"),
        }
    }
}

impl FromStr for BundlerChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        s.parse::<Bundler>()
            .map(Self::from)
            .map_err(|_| Error::UnknownBundler {
                name: s.to_string(),
                expected: "auto, tsup, unbuild".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bundler() {
        assert_eq!("tsup".parse::<Bundler>().unwrap(), Bundler::Tsup);
        assert_eq!("Unbuild".parse::<Bundler>().unwrap(), Bundler::Unbuild);
        assert!("webpack".parse::<Bundler>().is_err());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("auto".parse::<BundlerChoice>().unwrap(), BundlerChoice::Auto);
        assert_eq!(
            "tsup".parse::<BundlerChoice>().unwrap().bundler(),
            Some(Bundler::Tsup)
        );
        let err = "rollup".parse::<BundlerChoice>().unwrap_err();
        assert!(err.to_string().contains("auto, tsup, unbuild"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Bundler::Unbuild).unwrap();
        assert_eq!(json, "\"unbuild\"");
    }

    #[test]
    fn test_config_stem() {
        assert_eq!(Bundler::Tsup.config_stem(), "tsup.config");
        assert_eq!(Bundler::Unbuild.config_stem(), "build.config");
    }
}
