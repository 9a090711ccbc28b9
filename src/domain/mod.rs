//! Domain layer: platform definitions, link entries and the platform registry.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`registry`] - Ordered platform registry and URL detection
//! - [`precedence`] - Detection vs. manual tag policy
//! - [`match_mode`] - Substring or host-only domain matching
//!
//! # Resolution Flow
//!
//! 1. Content arrives as [`entities::SocialLinkEntry`] values
//! 2. [`registry::PlatformRegistry::detect`] classifies the URL
//! 3. [`crate::application::services::LinkResolver`] combines detection with the
//!    manual tag and produces [`entities::ResolvedLink`] values for rendering

pub mod entities;
pub mod match_mode;
pub mod precedence;
pub mod registry;

pub use match_mode::MatchMode;
pub use precedence::Precedence;
pub use registry::{PlatformRegistry, RegistryError, detect};
