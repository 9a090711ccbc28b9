//! Business logic services for the application layer.

pub mod link_resolver;

pub use link_resolver::{LinkResolver, resolve};
