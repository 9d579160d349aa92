//! REST API exposure
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`
//! with the resource routes, health checks, JSON fallbacks and the HTTP layers.

use super::super::host::ServerHost;
use crate::core::ApiError;
use anyhow::Result;
use axum::http::{Method, Uri};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Name reported by the health endpoints
pub const SERVICE_NAME: &str = "restaurant-api";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - Dish and order CRUD routes
    /// - 404 fallback for unknown paths and 405 fallback for unregistered methods
    /// - Request tracing, plus permissive CORS when `server.cors` is set
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        // The 405 fallback only covers routes merged before it
        let mut app = Self::health_routes()
            .merge(host.entity_registry.build_routes())
            .method_not_allowed_fallback(Self::method_not_allowed)
            .fallback(Self::path_not_found)
            .layer(TraceLayer::new_for_http());

        if host.config.server.cors {
            app = app.layer(CorsLayer::permissive());
        }

        Ok(app)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": SERVICE_NAME
        }))
    }

    async fn path_not_found(uri: Uri) -> ApiError {
        ApiError::not_found(format!("Path not found: {}", uri.path()))
    }

    async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
        ApiError::method_not_supported(format!("{} not allowed for {}", method, uri.path()))
    }
}
