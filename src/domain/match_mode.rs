//! How domain patterns are compared against a URL.

use std::fmt;
use std::str::FromStr;

/// Matching strategy used by the platform registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// A pattern matches when it appears anywhere in the lowercased URL.
    /// Registry order settles overlaps.
    #[default]
    Substring,
    /// A domain pattern matches only the parsed host or one of its
    /// subdomains (`x.com` no longer matches `netflix.com`).
    Host,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown match mode '{0}', expected 'substring' or 'host'")]
pub struct UnknownMatchMode(String);

impl FromStr for MatchMode {
    type Err = UnknownMatchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "host" => Ok(Self::Host),
            other => Err(UnknownMatchMode(other.to_string())),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("substring"),
            Self::Host => f.write_str("host"),
        }
    }
}
