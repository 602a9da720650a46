//! Business logic services for the Farm Registry

pub mod crop;
pub mod dashboard;
pub mod farm;
pub mod harvest;
pub mod planting;
pub mod producer;

pub use crop::CropService;
pub use dashboard::DashboardService;
pub use farm::FarmService;
pub use harvest::HarvestService;
pub use planting::PlantingService;
pub use producer::ProducerService;

use crate::error::{AppError, AppResult};
use shared::validation::FieldIssue;

/// Deletes are destructive; the caller must pass the confirmation flag
/// through instead of prompting. An unconfirmed delete never reaches the
/// store.
pub(crate) fn require_confirmation(confirmed: bool) -> AppResult<()> {
    if confirmed {
        return Ok(());
    }
    Err(AppError::validation(vec![FieldIssue::new(
        "confirm",
        "Exclusão requer confirmação (confirm=true)",
    )]))
}
