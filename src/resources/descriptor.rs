//! Entity descriptor wiring a resource's pipelines to its routes

use super::handlers::{
    ResourceState, create_record, delete_record, list_records, read_record, update_record,
};
use crate::core::Record;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor registering the five CRUD routes of one resource:
///
/// - GET    /{plural}
/// - POST   /{plural}
/// - GET    /{plural}/{singularId}
/// - PUT    /{plural}/{singularId}
/// - DELETE /{plural}/{singularId}
pub struct ResourceDescriptor<T: Record> {
    state: ResourceState<T>,
}

impl<T: Record> ResourceDescriptor<T> {
    pub fn new(state: ResourceState<T>) -> Self {
        Self { state }
    }
}

impl<T: Record> EntityDescriptor for ResourceDescriptor<T> {
    fn entity_type(&self) -> &str {
        T::resource_name_singular()
    }

    fn plural(&self) -> &str {
        T::resource_name()
    }

    fn build_routes(&self) -> Router {
        let collection = format!("/{}", T::resource_name());
        let member = format!(
            "/{}/{{{}Id}}",
            T::resource_name(),
            T::resource_name_singular()
        );

        Router::new()
            .route(&collection, get(list_records::<T>).post(create_record::<T>))
            .route(
                &member,
                get(read_record::<T>)
                    .put(update_record::<T>)
                    .delete(delete_record::<T>),
            )
            .with_state(self.state.clone())
    }
}
