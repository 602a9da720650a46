//! Farm/crop/harvest association payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for linking a farm to a crop grown during a harvest season.
///
/// The (farm, crop, harvest) triple is unique across the registry: a farm
/// cannot grow the same crop twice in the same season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingInput {
    pub farm_id: Uuid,
    pub crop_id: Uuid,
    pub harvest_id: Uuid,
}
