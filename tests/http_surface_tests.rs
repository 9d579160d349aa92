//! Tests for the parts of the HTTP surface shared by every resource
//!
//! Health checks, JSON fallbacks, malformed bodies, and a server booted from
//! a YAML configuration file.

use axum::http::StatusCode;
use axum_test::TestServer;
use restaurant::prelude::*;
use std::io::Write;

fn create_test_server() -> TestServer {
    let app = ServerBuilder::new()
        .with_id_generator(SequentialIdGenerator::new("id"))
        .build()
        .expect("Failed to build app");

    TestServer::new(app).expect("Failed to create test server")
}

// =============================================================================
// Health Check Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "restaurant-api");
    }

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let server = create_test_server();

        let response = server.get("/healthz").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

// =============================================================================
// Fallback Tests
// =============================================================================

mod fallback_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_path() {
        let server = create_test_server();

        let response = server.get("/menu/today").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body, json!({ "error": "Path not found: /menu/today" }));
    }

    #[tokio::test]
    async fn test_unsupported_method_on_collection() {
        let server = create_test_server();

        let response = server.delete("/orders").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = response.json();
        assert_eq!(body, json!({ "error": "DELETE not allowed for /orders" }));
    }

    #[tokio::test]
    async fn test_unsupported_method_on_member() {
        let server = create_test_server();

        let response = server.post("/dishes/d1").json(&json!({})).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = response.json();
        assert_eq!(body["error"], "POST not allowed for /dishes/d1");
    }
}

// =============================================================================
// Request Body Tests
// =============================================================================

mod body_tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let server = create_test_server();

        let response = server
            .post("/dishes")
            .text("{\"data\": {")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid JSON body: "), "{}", message);
    }

    #[tokio::test]
    async fn test_empty_body_reports_first_missing_field() {
        let server = create_test_server();

        let response = server.post("/orders").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Order must include a deliverTo");
    }

    #[tokio::test]
    async fn test_null_data_is_treated_as_empty() {
        let server = create_test_server();

        let response = server.post("/dishes").json(&json!({ "data": null })).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Dish must include a name");
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod config_tests {
    use super::*;

    const CONFIG: &str = r#"
server:
  cors: false
dishes:
  deletion: enabled
seed:
  dishes:
    - id: "3c637d011d844ebab1205fef8a7e36ea"
      name: "Broccoli and Stilton soup"
      description: "Creamy soup with a hint of cheese"
      price: 12
      image_url: "https://images.example.com/soup.jpg"
  orders:
    - id: "f6069a542257054114138301947672ba"
      deliverTo: "1600 Pennsylvania Avenue NW, Washington, DC 20500"
      mobileNumber: "(202) 456-1111"
      status: "out-for-delivery"
      dishes:
        - id: "3c637d011d844ebab1205fef8a7e36ea"
          quantity: 1
"#;

    fn server_from_file() -> TestServer {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        let app = ServerBuilder::new().with_config(config).build().unwrap();
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_seeded_records_are_served() {
        let server = server_from_file();

        let response = server.get("/dishes/3c637d011d844ebab1205fef8a7e36ea").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["data"]["name"],
            "Broccoli and Stilton soup"
        );

        let response = server.get("/orders/f6069a542257054114138301947672ba").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["data"]["status"],
            "out-for-delivery"
        );
    }

    #[tokio::test]
    async fn test_seeded_order_keeps_lifecycle_rules() {
        let server = server_from_file();

        let response = server.delete("/orders/f6069a542257054114138301947672ba").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dish_deletion_enabled_from_config() {
        let server = server_from_file();

        server
            .delete("/dishes/3c637d011d844ebab1205fef8a7e36ea")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get("/dishes").await;
        assert!(response.json::<Value>()["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_created_ids_are_uuid_hex_by_default() {
        let server = server_from_file();

        let response = server
            .post("/dishes")
            .json(&json!({
                "data": {
                    "name": "Dolcelatte and fig tart",
                    "description": "Baked tart",
                    "price": 19,
                    "image_url": "https://images.example.com/tart.jpg"
                }
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        let id = body["data"]["id"].as_str().unwrap();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
