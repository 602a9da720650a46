//! Dashboard statistics types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named count used by the dashboard charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub name: String,
    pub value: u64,
}

/// A named hectare total used by the land-use chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandUseEntry {
    pub name: String,
    pub value: Decimal,
}

/// Aggregated registry statistics, recomputed on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_farms: u64,
    pub total_hectares: Decimal,
    /// One entry per distinct state, in first-occurrence order.
    pub farms_by_state: Vec<ChartEntry>,
    /// Association counts grouped by crop name; a farm growing the same crop
    /// in two seasons counts twice.
    pub farms_by_crop: Vec<ChartEntry>,
    /// Always exactly two entries: arable and vegetation hectare totals.
    pub land_use: Vec<LandUseEntry>,
}

/// One farm of the fetched graph, as consumed by the aggregation engine.
#[derive(Debug, Clone)]
pub struct FarmSummary {
    pub state: String,
    pub total_area: Decimal,
    pub arable_area: Decimal,
    pub vegetation_area: Decimal,
    /// Crop name of each association on this farm, one entry per planting.
    pub crops: Vec<String>,
}
