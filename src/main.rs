use anyhow::{Context, Result};
use restaurant::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("restaurant=info,tower_http=info")),
        )
        .init();

    let mut config = match std::env::var("RESTAURANT_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::from_yaml_file(&path)?
        }
        Err(_) => AppConfig::default(),
    };

    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .with_context(|| format!("PORT must be a port number, got '{}'", port))?;
        config = config.with_port(port);
    }

    ServerBuilder::new()
        .with_config(config)
        .serve_configured()
        .await
}
