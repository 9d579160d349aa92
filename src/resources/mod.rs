//! Resources exposed by the API
//!
//! Each resource contributes a model implementing [`Record`](crate::core::Record)
//! and one [`Pipeline`] per operation. Route wiring, locking and logging are
//! shared by every resource through [`handlers`] and [`descriptor`].

pub mod descriptor;
pub mod dishes;
pub mod handlers;
pub mod orders;

pub use descriptor::ResourceDescriptor;
pub use handlers::ResourceState;

use crate::core::{ApiError, Pipeline};
use serde_json::Value;

/// The pipelines behind the item-level and collection-level routes of a resource
///
/// `GET /{plural}` (list) has no chain and is served straight from the store.
pub struct ResourcePipelines<T> {
    pub create: Pipeline<T>,
    pub read: Pipeline<T>,
    pub update: Pipeline<T>,
    pub delete: Pipeline<T>,
}

/// A text field that an earlier chain step already required
pub(crate) fn text_field(data: &Value, field: &str) -> Result<String, ApiError> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::internal(format!("{} was not validated", field)))
}
