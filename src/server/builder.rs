//! ServerBuilder for fluent API to build the HTTP server

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::{IdGenerator, UuidIdGenerator};
use crate::resources::dishes::Dish;
use crate::resources::orders::Order;
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the restaurant HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("restaurant.yaml")?)
///     .with_id_generator(SequentialIdGenerator::new("id"))
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    ids: Option<Arc<dyn IdGenerator>>,
    dishes: Option<InMemoryStore<Dish>>,
    orders: Option<InMemoryStore<Order>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            ids: None,
            dishes: None,
            orders: None,
        }
    }

    /// Use this configuration instead of the defaults
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the id generator (defaults to [`UuidIdGenerator`])
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Arc::new(ids));
        self
    }

    /// Serve dishes from an existing store
    ///
    /// The store handle stays usable by the caller, which lets tests inspect
    /// the records behind the HTTP API. `seed.dishes` is ignored.
    pub fn with_dish_store(mut self, store: InMemoryStore<Dish>) -> Self {
        self.dishes = Some(store);
        self
    }

    /// Serve orders from an existing store. `seed.orders` is ignored.
    pub fn with_order_store(mut self, store: InMemoryStore<Order>) -> Self {
        self.orders = Some(store);
        self
    }

    /// Build the host owning the stores
    pub fn build_host(self) -> Result<ServerHost> {
        let ids = self.ids.unwrap_or_else(|| Arc::new(UuidIdGenerator));

        let dishes = match self.dishes {
            Some(store) => store,
            None => seeded(self.config.seed.dishes.clone()),
        };
        let orders = match self.orders {
            Some(store) => store,
            None => seeded(self.config.seed.orders.clone()),
        };

        ServerHost::from_components(self.config, dishes, orders, ids)
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host)
    }

    /// Serve on `server.bind` from the configuration
    pub async fn serve_configured(self) -> Result<()> {
        let addr = self.config.server.bind.clone();
        self.serve(&addr).await
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the provided address and handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded<T: crate::core::Record>(records: Vec<T>) -> InMemoryStore<T> {
    if !records.is_empty() {
        tracing::info!(
            resource = T::resource_name(),
            count = records.len(),
            "seeding store"
        );
    }
    InMemoryStore::with_records(records)
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
