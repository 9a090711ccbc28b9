//! Ordered registry of known platforms.
//!
//! Detection walks the registry in order and the first match wins, so more
//! specific patterns (`music.youtube.com`) must come before broader ones
//! (`youtube.com`). By default a domain pattern matches anywhere in the URL;
//! see [`MatchMode`] for host-only matching.

use std::sync::LazyLock;

use crate::domain::MatchMode;
use crate::domain::entities::{GENERIC_LABEL, GENERIC_LINK, PlatformDefinition};
use crate::utils::sanitize::strip_invisible;
use crate::utils::url_normalizer::normalize_for_detection;

use crate::domain::entities::Matcher::{Domain, HostContains, Scheme};

/// Platforms known to the site, in detection order.
#[rustfmt::skip]
pub const BUILTIN_PLATFORMS: &[PlatformDefinition] = &[
    PlatformDefinition::new("email", "Email", &[Scheme("mailto")]),
    PlatformDefinition::new("spotify", "Spotify", &[Domain("spotify.com"), Domain("spotify.link")]),
    PlatformDefinition::new("appleMusic", "Apple Music", &[Domain("music.apple.com"), Domain("itunes.apple.com")]),
    PlatformDefinition::new("youtubeMusic", "YouTube Music", &[Domain("music.youtube.com")]),
    PlatformDefinition::new("youtube", "YouTube", &[Domain("youtube.com"), Domain("youtu.be")]),
    PlatformDefinition::new("soundcloud", "SoundCloud", &[Domain("soundcloud.com"), Domain("on.soundcloud.com")]),
    PlatformDefinition::new("bandcamp", "Bandcamp", &[Domain("bandcamp.com")]),
    PlatformDefinition::new("deezer", "Deezer", &[Domain("deezer.com"), Domain("deezer.page.link")]),
    PlatformDefinition::new("tidal", "TIDAL", &[Domain("tidal.com")]),
    PlatformDefinition::new("amazonMusic", "Amazon Music", &[HostContains("music.amazon.")]),
    PlatformDefinition::new("instagram", "Instagram", &[Domain("instagram.com"), Domain("instagr.am")]),
    PlatformDefinition::new("facebook", "Facebook", &[Domain("facebook.com"), Domain("fb.com"), Domain("fb.me")]),
    PlatformDefinition::new("twitter", "X (Twitter)", &[Domain("twitter.com"), Domain("x.com")]),
    PlatformDefinition::new("tiktok", "TikTok", &[Domain("tiktok.com")]),
    PlatformDefinition::new("threads", "Threads", &[Domain("threads.net"), Domain("threads.com")]),
    PlatformDefinition::new("bluesky", "Bluesky", &[Domain("bsky.app")]),
    PlatformDefinition::new("twitch", "Twitch", &[Domain("twitch.tv")]),
    PlatformDefinition::new("discord", "Discord", &[Domain("discord.com"), Domain("discord.gg")]),
    PlatformDefinition::new("patreon", "Patreon", &[Domain("patreon.com")]),
    PlatformDefinition::new("linkedin", "LinkedIn", &[Domain("linkedin.com")]),
    PlatformDefinition::new(GENERIC_LINK, GENERIC_LABEL, &[]),
];

static BUILTIN: LazyLock<PlatformRegistry> = LazyLock::new(PlatformRegistry::default);

/// Errors raised when assembling a custom registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Platform key must not be empty")]
    EmptyKey,

    #[error("Duplicate platform key: {0}")]
    DuplicateKey(String),

    #[error("Registry must contain the 'genericLink' fallback platform")]
    MissingFallback,
}

/// Ordered, immutable set of platform definitions.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    platforms: Vec<PlatformDefinition>,
    mode: MatchMode,
}

impl PlatformRegistry {
    /// Builds a registry from definitions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyKey`] for a blank key.
    /// Returns [`RegistryError::DuplicateKey`] if two keys are equal ignoring ASCII case.
    /// Returns [`RegistryError::MissingFallback`] if [`GENERIC_LINK`] is absent.
    pub fn new(platforms: Vec<PlatformDefinition>) -> Result<Self, RegistryError> {
        for (i, platform) in platforms.iter().enumerate() {
            if platform.key.trim().is_empty() {
                return Err(RegistryError::EmptyKey);
            }
            if platforms[..i]
                .iter()
                .any(|p| p.key.eq_ignore_ascii_case(platform.key))
            {
                return Err(RegistryError::DuplicateKey(platform.key.to_string()));
            }
        }

        if !platforms.iter().any(PlatformDefinition::is_generic) {
            return Err(RegistryError::MissingFallback);
        }

        Ok(Self {
            platforms,
            mode: MatchMode::default(),
        })
    }

    /// Switches the matching strategy.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// Shared registry with the built-in platforms.
    pub fn builtin() -> &'static PlatformRegistry {
        &BUILTIN
    }

    /// Finds the first platform whose matchers accept the URL.
    ///
    /// Empty input is a non-match. Unparsable input is still tested against
    /// substring patterns.
    pub fn detect(&self, url: &str) -> Option<&PlatformDefinition> {
        let url = strip_invisible(url);
        let normalized = match normalize_for_detection(&url) {
            Ok(normalized) => normalized,
            Err(e) => {
                tracing::trace!(url = %url, error = %e, "URL not eligible for detection");
                return None;
            }
        };

        self.platforms
            .iter()
            .find(|p| p.matches(&normalized, self.mode))
    }

    /// Looks up a platform by key, ignoring ASCII case.
    pub fn find(&self, key: &str) -> Option<&PlatformDefinition> {
        self.platforms
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
    }

    /// All platforms in detection order.
    pub fn platforms(&self) -> &[PlatformDefinition] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self {
            platforms: BUILTIN_PLATFORMS.to_vec(),
            mode: MatchMode::default(),
        }
    }
}

/// Detects a platform with the built-in registry.
///
/// # Examples
///
/// ```
/// use social_links::domain::detect;
///
/// assert_eq!(detect("HTTPS://WWW.FACEBOOK.com/x").map(|p| p.key), Some("facebook"));
/// assert_eq!(detect("localhost:3000/facebook.com").map(|p| p.key), Some("facebook"));
/// assert!(detect("https://example.com").is_none());
/// ```
pub fn detect(url: &str) -> Option<&'static PlatformDefinition> {
    PlatformRegistry::builtin().detect(url)
}
