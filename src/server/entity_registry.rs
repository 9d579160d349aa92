//! Entity registry for managing resource descriptors and collecting their CRUD routes

use anyhow::{Result, bail};
use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for a resource
///
/// Each resource (Dish, Order) provides one descriptor contributing its
/// collection and member routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "dish")
    fn entity_type(&self) -> &str;

    /// The plural form used as the route prefix (e.g., "dishes")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this resource
    ///
    /// Should return a Router with routes like:
    /// - GET /{plural}
    /// - POST /{plural}
    /// - GET /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all resources served by the application
///
/// Keyed by entity type; iteration order is alphabetical so route assembly is
/// deterministic.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register a descriptor
    ///
    /// Two descriptors with the same entity type or plural would claim the same
    /// routes, so the second one is refused.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) -> Result<()> {
        let entity_type = descriptor.entity_type().to_string();
        if self.descriptors.contains_key(&entity_type) {
            bail!("entity type '{}' is already registered", entity_type);
        }
        if self.plurals().contains(&descriptor.plural()) {
            bail!("route prefix '/{}' is already registered", descriptor.plural());
        }

        tracing::debug!(entity_type = %entity_type, plural = descriptor.plural(), "registered");
        self.descriptors.insert(entity_type, descriptor);
        Ok(())
    }

    /// Build a router with all registered resource routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Get all registered route prefixes
    pub fn plurals(&self) -> Vec<&str> {
        self.descriptors.values().map(|d| d.plural()).collect()
    }
}
