//! Common response types used across the platform

use serde::Serialize;

/// Uniform success envelope returned by every endpoint.
///
/// `count` is present on list responses only.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Wrap a single record or derived value.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wrap a collection, recording its length as `count`.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
        }
    }
}
