//! Core domain entities.
//!
//! - [`PlatformDefinition`] - A known service with its matching rules
//! - [`SocialLinkEntry`] - A link record as authored by a content editor
//! - [`ResolvedLink`] - The renderable result of resolving an entry

pub mod platform;
pub mod social_link;

pub use platform::{GENERIC_LABEL, GENERIC_LINK, Matcher, PlatformDefinition};
pub use social_link::{ResolvedLink, SocialLinkEntry};
