//! DTOs for the platform registry endpoint.

use serde::Serialize;

use crate::domain::entities::PlatformDefinition;

/// Registry listing in detection order.
#[derive(Debug, Serialize)]
pub struct PlatformListResponse {
    pub total: usize,
    pub items: Vec<PlatformDefinition>,
}
