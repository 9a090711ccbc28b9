//! Application layer services.
//!
//! Services combine domain pieces into the operations exposed by the HTTP
//! API and the CLI.
//!
//! # Available Services
//!
//! - [`services::link_resolver::LinkResolver`] - Platform resolution for social link entries

pub mod services;
