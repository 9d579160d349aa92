//! # Restaurant API
//!
//! An in-memory REST service for a restaurant's dishes and orders. Every
//! mutating or reading request runs an ordered chain of validators before its
//! handler touches the store.
//!
//! ## Features
//!
//! - **Validation Chains**: Ordered, short-circuiting validators composed per route
//! - **Shared Validators**: Existence, required fields and id consistency checks reused by both resources
//! - **Order Lifecycle**: Delivered orders are final, only pending orders can be deleted
//! - **Configuration-Based**: Bind address, CORS, dish deletion and seed data from YAML
//! - **Atomic Mutations**: Each store is guarded by a lock held for the whole chain
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restaurant::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_config(AppConfig::from_yaml_file("restaurant.yaml")?)
//!         .serve_configured()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod resources;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Chain, IdGenerator, Pipeline, Record, Reply, RequestContext,
        SequentialIdGenerator, UuidIdGenerator, Validator,
    };

    // === Validators ===
    pub use crate::core::validation::{
        BodyIdMatchesRoute, Exists, Payload, RequireField, RouteIdMatchesRecord,
    };

    // === Resources ===
    pub use crate::resources::dishes::{Dish, DishFields};
    pub use crate::resources::orders::{Order, OrderFields, OrderLineItem, OrderStatus};

    // === Configuration ===
    pub use crate::config::{AppConfig, DishDeletion};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Re-exports from external crates ===
    pub use axum::Router;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
}
