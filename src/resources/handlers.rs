//! HTTP handlers shared by every resource
//!
//! Each handler takes the store's write lock, builds a [`RequestContext`] and
//! runs the operation's pipeline to completion while the lock is held, so the
//! existence check and the mutation that follows see the same records.

use super::ResourcePipelines;
use crate::core::validation::Payload;
use crate::core::{ApiError, IdGenerator, Pipeline, Record, Reply, RequestContext};
use crate::storage::InMemoryStore;
use axum::extract::{Path, State};
use serde_json::Value;
use std::sync::Arc;

/// State shared by the routes of one resource
#[derive(Clone)]
pub struct ResourceState<T: Record> {
    pub store: InMemoryStore<T>,
    pub ids: Arc<dyn IdGenerator>,
    pub pipelines: Arc<ResourcePipelines<T>>,
}

impl<T: Record> ResourceState<T> {
    pub fn new(
        store: InMemoryStore<T>,
        ids: Arc<dyn IdGenerator>,
        pipelines: ResourcePipelines<T>,
    ) -> Self {
        Self {
            store,
            ids,
            pipelines: Arc::new(pipelines),
        }
    }

    /// Run `pipeline` against the store under its write lock
    pub async fn dispatch(
        &self,
        pipeline: &Pipeline<T>,
        route_id: Option<&str>,
        data: &Value,
    ) -> Result<Reply, ApiError> {
        let mut records = self.store.write().await;
        let mut ctx = RequestContext::new(&mut *records, self.ids.as_ref()).with_data(data);
        if let Some(route_id) = route_id {
            ctx = ctx.with_route_id(route_id);
        }

        tracing::debug!(
            resource = T::resource_name(),
            operation = pipeline.name(),
            route_id,
            "running pipeline"
        );

        let result = pipeline.execute(&mut ctx);
        match &result {
            Ok(reply) => tracing::debug!(
                resource = T::resource_name(),
                operation = pipeline.name(),
                status = %reply.status,
                "pipeline completed"
            ),
            Err(err) => tracing::warn!(
                resource = T::resource_name(),
                operation = pipeline.name(),
                status = %err.status_code(),
                error = %err,
                "request rejected"
            ),
        }
        result
    }
}

/// GET /{plural}
pub async fn list_records<T: Record>(
    State(state): State<ResourceState<T>>,
) -> Result<Reply, ApiError> {
    let records = state.store.list().await;
    tracing::debug!(resource = T::resource_name(), count = records.len(), "listing");
    Reply::ok(&records)
}

/// POST /{plural}
pub async fn create_record<T: Record>(
    State(state): State<ResourceState<T>>,
    Payload(data): Payload,
) -> Result<Reply, ApiError> {
    state
        .dispatch(&state.pipelines.create, None, &data)
        .await
}

/// GET /{plural}/{id}
pub async fn read_record<T: Record>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> Result<Reply, ApiError> {
    state
        .dispatch(&state.pipelines.read, Some(&id), &Value::Null)
        .await
}

/// PUT /{plural}/{id}
pub async fn update_record<T: Record>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
    Payload(data): Payload,
) -> Result<Reply, ApiError> {
    state
        .dispatch(&state.pipelines.update, Some(&id), &data)
        .await
}

/// DELETE /{plural}/{id}
pub async fn delete_record<T: Record>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> Result<Reply, ApiError> {
    state
        .dispatch(&state.pipelines.delete, Some(&id), &Value::Null)
        .await
}

/// Terminal handler: respond 200 with the located record
pub fn read_located<T: Record>(ctx: &mut RequestContext<'_, T>) -> Result<Reply, ApiError> {
    Reply::ok(ctx.located()?)
}

/// Terminal handler: remove the located record and respond 204
pub fn remove_located<T: Record>(ctx: &mut RequestContext<'_, T>) -> Result<Reply, ApiError> {
    let removed = ctx.remove_located()?;
    tracing::info!(resource = T::resource_name(), id = removed.id(), "removed");
    Ok(Reply::no_content())
}
