//! Shared types and rules for the Farm Registry
//!
//! This crate holds the pure core of the registry: input payloads, the
//! field-level validation rules, the dashboard aggregation engine, and the
//! response envelope. It performs no I/O and carries no framework types.

pub mod models;
pub mod stats;
pub mod types;
pub mod validation;

pub use models::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
