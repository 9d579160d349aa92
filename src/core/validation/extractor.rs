//! Axum extractor for the `{ "data": { ... } }` request envelope
//!
//! This module provides the `Payload` extractor that unwraps the `data` member
//! of a JSON body before it reaches the validation chain.

use crate::core::error::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

/// The `data` member of the request body
///
/// A missing or `null` `data` member, an empty body, or a body that is not a
/// JSON object all yield an empty object, so field checks report the missing
/// field rather than a parse failure.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(Payload(data): Payload) -> Result<Reply, ApiError> {
///     // data is the inner object, never the envelope
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

impl Payload {
    /// Unwrap the envelope of an already parsed body
    pub fn from_body(body: Value) -> Self {
        let data = match body {
            Value::Object(mut envelope) => envelope.remove("data"),
            _ => None,
        };
        match data {
            None | Some(Value::Null) => Payload(Value::Object(Map::new())),
            Some(data) => Payload(data),
        }
    }

    /// Get the inner data
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl std::ops::Deref for Payload {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody {
                message: e.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload::from_body(Value::Null));
        }

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidBody {
            message: e.to_string(),
        })?;

        Ok(Payload::from_body(body))
    }
}
