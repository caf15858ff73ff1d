use serde::{Deserialize, Serialize};

use super::shape::ShapeKind;

/// Response body for the /api/area endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaResponse {
    /// The label the caller sent, echoed back unchanged.
    pub shape: String,
    /// The variant the input resolved to.
    pub kind: ShapeKind,
    /// Computed area, unrounded.
    pub area: f64,
}

/// Error body returned by the API handlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
