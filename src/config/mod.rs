//! Configuration loading and management

use crate::resources::dishes::Dish;
use crate::resources::orders::Order;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Complete configuration for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dishes: DishesConfig,
    pub seed: SeedConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind (e.g., "127.0.0.1:5000")
    pub bind: String,

    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            cors: true,
        }
    }
}

/// Behaviour of `DELETE /dishes/{dishId}` once the dish is found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishDeletion {
    /// Respond 405 and leave the store untouched
    #[default]
    Disabled,
    /// Remove the dish and respond 204
    Enabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DishesConfig {
    pub deletion: DishDeletion,
}

/// Records loaded into the stores at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Replace the port of `server.bind`
    pub fn with_port(mut self, port: u16) -> Self {
        let host = self
            .server
            .bind
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| self.server.bind.clone());
        self.server.bind = format!("{}:{}", host, port);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::orders::OrderStatus;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.bind, "127.0.0.1:5000");
        assert!(config.server.cors);
        assert_eq!(config.dishes.deletion, DishDeletion::Disabled);
        assert!(config.seed.dishes.is_empty());
        assert!(config.seed.orders.is_empty());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:5000");
        assert_eq!(config.dishes.deletion, DishDeletion::Disabled);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
server:
  bind: "0.0.0.0:8080"
  cors: false
dishes:
  deletion: enabled
seed:
  dishes:
    - id: "d1"
      name: "Dolcelatte and chickpea spaghetti"
      description: "Spaghetti topped with a blend of dolcelatte and fresh chickpeas"
      price: 19
      image_url: "https://images.example.com/spaghetti.jpg"
  orders:
    - id: "o1"
      deliverTo: "308 Negra Arroyo Lane"
      mobileNumber: "(505) 143-3369"
      status: out-for-delivery
      dishes:
        - id: "d1"
          name: "Dolcelatte and chickpea spaghetti"
          quantity: 2
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert!(!config.server.cors);
        assert_eq!(config.dishes.deletion, DishDeletion::Enabled);
        assert_eq!(config.seed.dishes.len(), 1);
        assert_eq!(config.seed.dishes[0].price, 19);

        let order = &config.seed.orders[0];
        assert_eq!(order.deliver_to, "308 Negra Arroyo Lane");
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.dishes[0].quantity, 2);
        assert_eq!(order.dishes[0].dish_id(), Some("d1"));
    }

    #[test]
    fn test_unknown_deletion_mode_is_rejected() {
        let result = AppConfig::from_yaml_str("dishes:\n  deletion: sometimes\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.server.bind, config.server.bind);
        assert_eq!(parsed.dishes.deletion, config.dishes.deletion);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  bind: \"127.0.0.1:7000\"").unwrap();

        let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:7000");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AppConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_with_port_replaces_port() {
        let config = AppConfig::default().with_port(9000);
        assert_eq!(config.server.bind, "127.0.0.1:9000");
    }
}
