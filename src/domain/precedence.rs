//! Which source wins when a detected platform and a manual tag disagree.

use std::fmt;
use std::str::FromStr;

/// Precedence between URL detection and the editor's manual platform tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precedence {
    /// Detection wins; the manual tag is only a fallback. Protects against
    /// stale manual tags after a URL changes.
    #[default]
    Detected,
    /// An explicit manual tag wins; detection fills in when the tag is empty.
    Manual,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown precedence '{0}', expected 'detected' or 'manual'")]
pub struct UnknownPrecedence(String);

impl FromStr for Precedence {
    type Err = UnknownPrecedence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detected" => Ok(Self::Detected),
            "manual" => Ok(Self::Manual),
            other => Err(UnknownPrecedence(other.to_string())),
        }
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detected => f.write_str("detected"),
            Self::Manual => f.write_str("manual"),
        }
    }
}
