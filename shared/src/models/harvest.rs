//! Harvest payloads

use serde::{Deserialize, Serialize};

/// Payload for creating or replacing a harvest season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestInput {
    /// Display name, e.g. "Safra 2024".
    pub name: String,
    /// Season year, 2000 to 2100 inclusive.
    pub year: i32,
}
