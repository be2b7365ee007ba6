// --- File: crates/staybook_common/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Body returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActionResponse {
    pub success: bool,
    #[cfg_attr(feature = "openapi", schema(example = "Booking added."))]
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
