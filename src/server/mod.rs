//! Server module for building the HTTP service
//!
//! `ServerBuilder` assembles a `ServerHost` that owns the dish and order stores,
//! registers both resources and exposes them over REST.

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
