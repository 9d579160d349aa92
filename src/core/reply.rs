//! Successful response produced by a pipeline's terminal handler

use super::error::ApiError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

/// Status plus optional `{ "data": ... }` body
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    /// Wrap `data` in the `{ "data": ... }` envelope
    pub fn data(status: StatusCode, data: &impl Serialize) -> Result<Self, ApiError> {
        Ok(Self {
            status,
            body: Some(json!({ "data": serde_json::to_value(data)? })),
        })
    }

    pub fn ok(data: &impl Serialize) -> Result<Self, ApiError> {
        Self::data(StatusCode::OK, data)
    }

    pub fn created(data: &impl Serialize) -> Result<Self, ApiError> {
        Self::data(StatusCode::CREATED, data)
    }

    /// 204 with an empty body
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: None,
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}
