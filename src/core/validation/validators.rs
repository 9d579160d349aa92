//! Reusable validators shared by every resource
//!
//! Field checks follow JavaScript-style truthiness on the request JSON:
//! `null`, `false`, `0` and `""` are falsy, everything else is truthy.

use super::chain::{RequestContext, Validator};
use crate::core::entity::Record;
use crate::core::error::ApiError;
use serde_json::Value;

/// Truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value as an integer greater than zero
///
/// Whole floats (`5.0`) count as integers; strings never do. Values must fit
/// in a `u64` because prices and quantities are stored as one, so a whole float
/// such as `1e300` is rejected like any other invalid number.
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= 1.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Render a request value for an error message
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Existence check: 404 unless a record matches the route id.
///
/// On success the record is remembered for the rest of the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exists;

impl<T: Record> Validator<T> for Exists {
    fn validate(&self, ctx: &mut RequestContext<'_, T>) -> Result<(), ApiError> {
        let route_id = ctx.route_id().unwrap_or_default();
        match ctx.records().iter().position(|record| record.id() == route_id) {
            Some(index) => {
                ctx.locate(index);
                Ok(())
            }
            None => Err(ApiError::not_found(format!("{} not found", T::KIND))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    /// Non-empty string
    Text,
    /// Any truthy value
    Present,
}

/// Required-field check: 400 "{Kind} must include a {field}"
#[derive(Debug, Clone, Copy)]
pub struct RequireField {
    field: &'static str,
    rule: FieldRule,
}

impl RequireField {
    /// The field must be a non-empty string
    pub fn text(field: &'static str) -> Self {
        Self {
            field,
            rule: FieldRule::Text,
        }
    }

    /// The field must be truthy; its shape is checked by a later step
    pub fn present(field: &'static str) -> Self {
        Self {
            field,
            rule: FieldRule::Present,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl<T: Record> Validator<T> for RequireField {
    fn validate(&self, ctx: &mut RequestContext<'_, T>) -> Result<(), ApiError> {
        let value = ctx.field(self.field);
        let ok = match self.rule {
            FieldRule::Text => value.as_str().is_some_and(|s| !s.is_empty()),
            FieldRule::Present => is_truthy(value),
        };
        if ok {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "{} must include a {}",
                T::KIND,
                self.field
            )))
        }
    }
}

/// 400 when the body carries a truthy `id` that differs from the route id
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyIdMatchesRoute;

impl<T: Record> Validator<T> for BodyIdMatchesRoute {
    fn validate(&self, ctx: &mut RequestContext<'_, T>) -> Result<(), ApiError> {
        let body_id = ctx.field("id");
        let route_id = ctx.route_id().unwrap_or_default();
        if is_truthy(body_id) && body_id.as_str() != Some(route_id) {
            return Err(id_mismatch::<T>(body_id, route_id));
        }
        Ok(())
    }
}

/// 400 when the located record's id is empty or differs from the route id
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteIdMatchesRecord;

impl<T: Record> Validator<T> for RouteIdMatchesRecord {
    fn validate(&self, ctx: &mut RequestContext<'_, T>) -> Result<(), ApiError> {
        let route_id = ctx.route_id().unwrap_or_default();
        let record_id = ctx.located()?.id();
        if record_id.is_empty() || record_id != route_id {
            return Err(id_mismatch::<T>(ctx.field("id"), route_id));
        }
        Ok(())
    }
}

fn id_mismatch<T: Record>(body_id: &Value, route_id: &str) -> ApiError {
    ApiError::validation(format!(
        "{kind} id does not match route id. {kind}: {}, Route: {}",
        describe(body_id),
        route_id,
        kind = T::KIND,
    ))
}
