//! # Social Links
//!
//! Platform detection for social and streaming links authored in a CMS.
//!
//! Given a freeform URL and an optional manually chosen platform tag, the
//! resolver picks a canonical platform key (used for the icon) and a display
//! label. Detection is registry-driven: an ordered list of platforms, each
//! with domain or scheme matchers, where the first match wins.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Platform definitions, link entries and the registry
//! - **Application Layer** ([`application`]) - The link resolver service
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Example
//!
//! ```
//! use social_links::prelude::*;
//!
//! let entry = SocialLinkEntry::with_url("https://instagram.com/band").manual_platform("twitter");
//! let link = resolve(&entry).unwrap();
//!
//! assert_eq!(link.platform_key, "instagram");
//! assert_eq!(link.display_label, "Instagram");
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkResolver, resolve};
    pub use crate::domain::entities::{
        GENERIC_LINK, Matcher, PlatformDefinition, ResolvedLink, SocialLinkEntry,
    };
    pub use crate::domain::{MatchMode, PlatformRegistry, Precedence, detect};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::sanitize::clean;
}
