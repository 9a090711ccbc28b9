//! Platform entity describing a social or streaming service.

use serde::Serialize;

use crate::domain::MatchMode;
use crate::utils::url_normalizer::NormalizedUrl;

/// Key of the fallback platform used when no known service is identified.
pub const GENERIC_LINK: &str = "genericLink";

/// Display label of the fallback platform.
pub const GENERIC_LABEL: &str = "Link";

/// A single rule tested against a normalized URL.
///
/// URLs are lowercased before matching, so patterns must be lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "pattern", rename_all = "camelCase")]
pub enum Matcher {
    /// Domain pattern. Under [`MatchMode::Substring`] it matches anywhere in
    /// the URL; under [`MatchMode::Host`] the host must equal the domain or
    /// be one of its subdomains.
    Domain(&'static str),
    /// Fragment contained in the URL, or in the host under [`MatchMode::Host`].
    HostContains(&'static str),
    /// URL scheme equals the value (e.g. `mailto`).
    Scheme(&'static str),
}

impl Matcher {
    /// Returns true if this rule accepts the URL.
    pub fn matches(&self, url: &NormalizedUrl, mode: MatchMode) -> bool {
        match (self, mode) {
            (Matcher::Domain(pattern) | Matcher::HostContains(pattern), MatchMode::Substring) => {
                url.text.contains(pattern)
            }
            (Matcher::Domain(domain), MatchMode::Host) => url.host.as_deref().is_some_and(|host| {
                host.strip_suffix(domain)
                    .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
            }),
            (Matcher::HostContains(fragment), MatchMode::Host) => url
                .host
                .as_deref()
                .is_some_and(|host| host.contains(fragment)),
            (Matcher::Scheme(scheme), _) => url.scheme.as_deref() == Some(*scheme),
        }
    }
}

/// A known platform with its canonical key, label and matching rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub matchers: &'static [Matcher],
}

impl PlatformDefinition {
    /// Creates a new platform definition.
    pub const fn new(key: &'static str, label: &'static str, matchers: &'static [Matcher]) -> Self {
        Self {
            key,
            label,
            matchers,
        }
    }

    /// Returns true if any of the matchers accepts the URL.
    pub fn matches(&self, url: &NormalizedUrl, mode: MatchMode) -> bool {
        self.matchers.iter().any(|m| m.matches(url, mode))
    }

    /// Returns true for the fallback platform.
    pub fn is_generic(&self) -> bool {
        self.key == GENERIC_LINK
    }
}
