//! HTTP handlers for the Farm Registry

pub mod crop;
pub mod dashboard;
pub mod farm;
pub mod harvest;
pub mod health;
pub mod planting;
pub mod producer;

pub use crop::*;
pub use dashboard::*;
pub use farm::*;
pub use harvest::*;
pub use health::*;
pub use planting::*;
pub use producer::*;

use serde::Deserialize;

/// Confirmation flag required by delete endpoints.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub confirm: Option<bool>,
}

impl DeleteParams {
    pub fn confirmed(&self) -> bool {
        self.confirm.unwrap_or(false)
    }
}
