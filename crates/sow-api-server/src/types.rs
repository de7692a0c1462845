//! API request and response types

use serde::{Deserialize, Serialize};

pub use sow_document::SowRequest;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}
