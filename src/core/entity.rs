//! Record trait defining the core abstraction for every stored resource

use serde::Serialize;

/// Base trait for all records kept in a store.
///
/// A record has:
/// - a `KIND` used in client-facing messages ("Dish", "Order")
/// - singular/plural resource names used in routes
/// - an immutable string id assigned at creation
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Human-readable kind used in messages (e.g., "Dish")
    const KIND: &'static str;

    /// The plural resource name used in URLs (e.g., "dishes")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "dish")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;
}
