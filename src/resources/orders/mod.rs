//! Orders resource

pub mod model;
pub mod pipelines;

pub use model::{Order, OrderFields, OrderLineItem, OrderStatus};
pub use pipelines::pipelines;
