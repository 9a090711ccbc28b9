//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod detect;
pub mod health;
pub mod platforms;
pub mod resolve;

pub use detect::detect_handler;
pub use health::health_handler;
pub use platforms::platforms_handler;
pub use resolve::resolve_handler;
