//! Application context owning the stores
//!
//! `ServerHost` is the single owner of both resource stores and the id
//! generator. Handlers receive clones of the store handles through their
//! resource state; nothing lives in module-level globals.

use crate::config::AppConfig;
use crate::core::IdGenerator;
use crate::resources::dishes::{self, Dish};
use crate::resources::orders::{self, Order};
use crate::resources::{ResourceDescriptor, ResourceState};
use crate::server::entity_registry::EntityRegistry;
use crate::storage::InMemoryStore;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::from_components(
///     AppConfig::default(),
///     InMemoryStore::new(),
///     InMemoryStore::new(),
///     Arc::new(UuidIdGenerator),
/// )?;
/// let app = RestExposure::build_router(Arc::new(host))?;
/// ```
pub struct ServerHost {
    /// Configuration the host was built from
    pub config: Arc<AppConfig>,

    /// Dishes store
    pub dishes: InMemoryStore<Dish>,

    /// Orders store
    pub orders: InMemoryStore<Order>,

    /// Shared id generator for both stores
    pub ids: Arc<dyn IdGenerator>,

    /// Entity registry for CRUD routes
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build the host and register both resources
    pub fn from_components(
        config: AppConfig,
        dishes: InMemoryStore<Dish>,
        orders: InMemoryStore<Order>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self> {
        let mut entity_registry = EntityRegistry::new();

        entity_registry.register(Box::new(ResourceDescriptor::new(ResourceState::new(
            dishes.clone(),
            ids.clone(),
            dishes::pipelines(config.dishes.deletion),
        ))))?;
        entity_registry.register(Box::new(ResourceDescriptor::new(ResourceState::new(
            orders.clone(),
            ids.clone(),
            orders::pipelines(),
        ))))?;

        Ok(Self {
            config: Arc::new(config),
            dishes,
            orders,
            ids,
            entity_registry,
        })
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }
}
