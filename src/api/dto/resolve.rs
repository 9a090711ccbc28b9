//! DTOs for the batch resolution endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ResolvedLink, SocialLinkEntry};

/// Request to resolve a list of authored social links.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveRequest {
    #[validate(length(max = 500, message = "At most 500 links per request"))]
    #[validate(nested)]
    pub links: Vec<LinkItem>,
}

/// A single social link as sent by the CMS.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    #[serde(default, alias = "_key")]
    pub key: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: Option<String>,

    #[serde(default, alias = "platform")]
    #[validate(length(max = 64))]
    pub manual_platform: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub custom_title: Option<String>,
}

impl From<LinkItem> for SocialLinkEntry {
    fn from(item: LinkItem) -> Self {
        Self {
            key: item.key,
            url: item.url,
            manual_platform: item.manual_platform,
            custom_title: item.custom_title,
        }
    }
}

/// Resolved links ready for rendering.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub summary: ResolveSummary,
    pub items: Vec<ResolvedLink>,
}

/// Summary statistics for the batch.
#[derive(Debug, Serialize)]
pub struct ResolveSummary {
    pub total: usize,
    pub resolved: usize,
    pub dropped: usize,
}
