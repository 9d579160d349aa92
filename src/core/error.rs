//! Typed error handling for the restaurant API
//!
//! Every failure in a request pipeline is a per-request 4xx (or, for a
//! serialization bug, 500) response. Nothing here is fatal to the process.
//!
//! # Error Categories
//!
//! - [`ApiError::NotFound`]: the route id matches no record in the store
//! - [`ApiError::Validation`]: missing or malformed field, id mismatch, business rule
//! - [`ApiError::MethodNotSupported`]: operation disabled for this resource
//! - [`ApiError::InvalidBody`]: request body is not a JSON document
//! - [`ApiError::Internal`]: response could not be produced
//!
//! # Example
//!
//! ```rust,ignore
//! use restaurant::prelude::*;
//!
//! match result {
//!     Err(ApiError::NotFound { message }) => println!("missing: {}", message),
//!     Err(e) => eprintln!("{} ({})", e, e.status_code()),
//!     Ok(reply) => { /* ... */ }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The error type produced by validation chains and handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No record matches the route id
    #[error("{message}")]
    NotFound { message: String },

    /// A field is missing or malformed, ids disagree, or a business rule fails
    #[error("{message}")]
    Validation { message: String },

    /// The route exists but the operation is switched off
    #[error("{message}")]
    MethodNotSupported { message: String },

    /// The request body could not be parsed
    #[error("Invalid JSON body: {message}")]
    InvalidBody { message: String },

    /// Internal failure (should not happen in normal operation)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Error body returned to clients: `{ "error": "<message>" }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn method_not_supported(message: impl Into<String>) -> Self {
        ApiError::MethodNotSupported {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::MethodNotSupported { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::MethodNotSupported { .. } => "METHOD_NOT_SUPPORTED",
            ApiError::InvalidBody { .. } => "INVALID_BODY",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::not_found("Dish not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::validation("Dish must include a name").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::method_not_supported("nope").status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::InvalidBody {
                message: "eof".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::not_found("x").error_code(), "NOT_FOUND");
        assert_eq!(ApiError::validation("x").error_code(), "VALIDATION_ERROR");
        assert_eq!(
            ApiError::method_not_supported("x").error_code(),
            "METHOD_NOT_SUPPORTED"
        );
    }

    #[test]
    fn test_display_is_the_bare_message() {
        let err = ApiError::validation("Order must include a deliverTo");
        assert_eq!(err.to_string(), "Order must include a deliverTo");

        let err = ApiError::InvalidBody {
            message: "expected value".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid JSON body: expected value");
    }

    #[test]
    fn test_to_response_wraps_message() {
        let body = ApiError::not_found("Dish not found").to_response();
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Dish not found" }));
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = ApiError::validation("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
