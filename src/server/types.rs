use crate::render::ViewMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub mode: ViewMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CopyResponse {
    pub copied: bool,
    /// Milliseconds until the acknowledgment reverts.
    pub ack_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
