//! Resolution of authored social link entries into renderable links.

use std::sync::{Arc, LazyLock};

use crate::domain::entities::{GENERIC_LABEL, PlatformDefinition, ResolvedLink, SocialLinkEntry};
use crate::domain::{PlatformRegistry, Precedence};
use crate::utils::sanitize::{clean, clean_optional, strip_invisible};

static DEFAULT_RESOLVER: LazyLock<LinkResolver> = LazyLock::new(LinkResolver::default);

/// Service combining URL detection with the editor's manual platform tag.
///
/// Resolution is pure: the same entry always yields the same result, and no
/// input makes it fail. Entries that cannot be rendered resolve to `None`.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    registry: Arc<PlatformRegistry>,
    precedence: Precedence,
}

impl LinkResolver {
    /// Creates a new resolver over a registry.
    pub fn new(registry: Arc<PlatformRegistry>, precedence: Precedence) -> Self {
        Self {
            registry,
            precedence,
        }
    }

    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Detects the platform of a URL, `None` when nothing matches.
    pub fn detect(&self, url: &str) -> Option<&PlatformDefinition> {
        self.registry.detect(url)
    }

    /// Resolves a single entry.
    ///
    /// # Rules
    ///
    /// 1. An empty or absent URL makes the entry unrenderable (`None`)
    /// 2. A detected platform wins over the manual tag (unless the
    ///    precedence is [`Precedence::Manual`] and the tag is set)
    /// 3. Otherwise the cleaned manual tag is used, falling back to
    ///    [`GENERIC_LINK`](crate::domain::entities::GENERIC_LINK)
    /// 4. Keys naming a registered platform are replaced by its canonical key
    /// 5. The generic fallback, and unregistered keys, are labelled with the
    ///    custom title or `"Link"`
    pub fn resolve(&self, entry: &SocialLinkEntry) -> Option<ResolvedLink> {
        let url = strip_invisible(entry.url.as_deref().unwrap_or_default());
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        let detected = self.registry.detect(url);
        let manual = clean_optional(entry.manual_platform.as_deref());

        let key = match (self.precedence, detected, manual) {
            (Precedence::Manual, _, Some(manual)) => manual,
            (_, Some(platform), manual) => {
                if let Some(manual) = manual.filter(|m| !m.eq_ignore_ascii_case(platform.key)) {
                    tracing::debug!(
                        url,
                        detected = platform.key,
                        manual = %manual,
                        "Manual platform overridden by detection"
                    );
                }
                platform.key.to_string()
            }
            (_, None, manual) => clean(manual.as_deref()),
        };

        let (platform_key, display_label) = match self.registry.find(&key) {
            Some(platform) if !platform.is_generic() => {
                (platform.key.to_string(), platform.label.to_string())
            }
            Some(platform) => (platform.key.to_string(), self.fallback_label(entry)),
            None => (key, self.fallback_label(entry)),
        };

        Some(ResolvedLink {
            key: entry.key.clone(),
            platform_key,
            display_label,
            url: url.to_string(),
        })
    }

    /// Resolves a list of entries, dropping the unrenderable ones.
    ///
    /// Input order is preserved.
    pub fn resolve_all<'a, I>(&self, entries: I) -> Vec<ResolvedLink>
    where
        I: IntoIterator<Item = &'a SocialLinkEntry>,
    {
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let resolved = self.resolve(entry);
                if resolved.is_none() {
                    tracing::debug!(
                        index,
                        key = entry.key.as_deref().unwrap_or_default(),
                        "Dropping social link without URL"
                    );
                }
                resolved
            })
            .collect()
    }

    fn fallback_label(&self, entry: &SocialLinkEntry) -> String {
        clean_optional(entry.custom_title.as_deref()).unwrap_or_else(|| GENERIC_LABEL.to_string())
    }
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new(Arc::new(PlatformRegistry::default()), Precedence::default())
    }
}

/// Resolves an entry with the built-in registry and default precedence.
pub fn resolve(entry: &SocialLinkEntry) -> Option<ResolvedLink> {
    DEFAULT_RESOLVER.resolve(entry)
}
