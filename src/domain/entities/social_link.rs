//! Social link entries as authored in CMS content, and their resolved form.

use serde::{Deserialize, Serialize};

/// A single author-supplied social link record.
///
/// Field names follow the CMS payload: `_key` and `platform` are accepted
/// as aliases for `key` and `manualPlatform`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkEntry {
    #[serde(default, alias = "_key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, alias = "platform", skip_serializing_if = "Option::is_none")]
    pub manual_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

impl SocialLinkEntry {
    /// Creates an entry with only a URL set.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn manual_platform(mut self, platform: impl Into<String>) -> Self {
        self.manual_platform = Some(platform.into());
        self
    }

    pub fn custom_title(mut self, title: impl Into<String>) -> Self {
        self.custom_title = Some(title.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// A renderable link: icon key, label and anchor target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub platform_key: String,
    pub display_label: String,
    pub url: String,
}
