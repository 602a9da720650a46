//! Crop payloads

use serde::{Deserialize, Serialize};

/// Payload for creating or replacing a crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropInput {
    pub name: String,
}
