//! Core module containing the error model, body extraction, and shared types

pub mod error;
pub mod extract;
pub mod slug;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use extract::AppJson;
pub use slug::Slugifier;

use serde::Serialize;

/// Confirmation body for delete endpoints: `{"status": "deleted"}`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
