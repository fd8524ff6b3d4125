//! Typed error handling for the biztime API
//!
//! Every handler returns `Result<_, ApiError>`. The error carries the HTTP
//! status and the user-visible message; `IntoResponse` is the single place
//! where failures are translated into the JSON `{"message": ...}` body the
//! API exposes.
//!
//! # Error Categories
//!
//! - [`ApiError::BadRequest`]: input validation failures (400)
//! - [`ApiError::NotFound`]: missing companies, invoices, industries (404)
//! - [`ApiError::Storage`]: anything the database driver reports (500) —
//!   the underlying cause is logged, the client only sees a generic message

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the biztime API
#[derive(Debug)]
pub enum ApiError {
    /// Input validation failure, reported verbatim to the client
    BadRequest(String),

    /// A referenced entity does not exist
    NotFound(String),

    /// Unclassified database failure
    Storage(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            // Internal details are never shown to the client
            ApiError::Storage(_) => write!(f, "Something went wrong"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(e) = &self {
            tracing::error!("storage error: {}", e);
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Storage(err)
    }
}

/// A specialized Result type for handler and store operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_display() {
        let err = ApiError::BadRequest("Amount must be a positive number".to_string());
        assert_eq!(err.to_string(), "Amount must be a positive number");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound("Company with code 'apple' not found".to_string());
        assert_eq!(err.to_string(), "Company with code 'apple' not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_hides_details() {
        let err = ApiError::Storage(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "Something went wrong");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::Storage(_)));
    }

    #[test]
    fn test_error_response_serialization() {
        let err = ApiError::NotFound("Not Found".to_string());
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Not Found" }));
    }
}
