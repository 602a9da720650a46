//! Input payloads and derived types for the Farm Registry

pub mod crop;
pub mod dashboard;
pub mod farm;
pub mod harvest;
pub mod planting;
pub mod producer;

pub use crop::*;
pub use dashboard::*;
pub use farm::*;
pub use harvest::*;
pub use planting::*;
pub use producer::*;
