//! Core module containing the record abstraction, errors and the validation pipeline

pub mod entity;
pub mod error;
pub mod id;
pub mod reply;
pub mod validation;

pub use entity::Record;
pub use error::ApiError;
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use reply::Reply;
pub use validation::{Chain, Pipeline, RequestContext, Validator};
