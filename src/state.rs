//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkResolver;

/// State shared by all handlers.
///
/// The resolver and its registry are immutable, so clones are cheap and
/// handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<LinkResolver>,
}

impl AppState {
    pub fn new(resolver: LinkResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}
