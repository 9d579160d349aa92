//! Dishes resource

pub mod model;
pub mod pipelines;

pub use model::{Dish, DishFields};
pub use pipelines::pipelines;
