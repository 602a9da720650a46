//! Farm payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for creating or replacing a farm.
///
/// The three area fields are always submitted together so the allocation
/// invariant is checked against one consistent snapshot, never against a mix
/// of submitted and persisted values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmInput {
    pub producer_id: Uuid,
    pub name: String,
    pub city: String,
    /// Two-letter state code, e.g. "SP".
    pub state: String,
    /// Total area in hectares.
    pub total_area: Decimal,
    /// Arable area in hectares.
    pub arable_area: Decimal,
    /// Vegetation area in hectares.
    pub vegetation_area: Decimal,
}
