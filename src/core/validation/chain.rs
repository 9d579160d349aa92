//! Ordered validation chains and the pipelines built from them
//!
//! A request runs through `Pipeline = Chain + terminal handler`:
//!
//! ```text
//! Exists ─▶ RequireField("name") ─▶ ... ─▶ BodyIdMatchesRoute ─▶ handler
//!    │              │                               │
//!    └──── 404 ─────┴──────────── 400 ──────────────┘  (first failure wins)
//! ```
//!
//! The first validator that fails halts the chain and its error becomes the
//! response. The handler only runs once every validator passed, so a rejected
//! request never mutates the store.

use crate::core::entity::Record;
use crate::core::error::ApiError;
use crate::core::id::IdGenerator;
use crate::core::reply::Reply;
use serde_json::Value;

static NULL: Value = Value::Null;

/// Per-request state shared by every step of a pipeline
///
/// Holds mutable access to the store's records for the whole pipeline, plus the
/// "located record" slot that the existence check fills for later steps.
pub struct RequestContext<'a, T> {
    route_id: Option<&'a str>,
    data: &'a Value,
    records: &'a mut Vec<T>,
    ids: &'a dyn IdGenerator,
    located: Option<usize>,
}

impl<'a, T: Record> RequestContext<'a, T> {
    pub fn new(records: &'a mut Vec<T>, ids: &'a dyn IdGenerator) -> Self {
        Self {
            route_id: None,
            data: &NULL,
            records,
            ids,
            located: None,
        }
    }

    /// Set the `:id` segment of the route
    pub fn with_route_id(mut self, route_id: &'a str) -> Self {
        self.route_id = Some(route_id);
        self
    }

    /// Set the `data` member of the request body
    pub fn with_data(mut self, data: &'a Value) -> Self {
        self.data = data;
        self
    }

    pub fn route_id(&self) -> Option<&'a str> {
        self.route_id
    }

    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// A member of the request data, `null` when absent
    pub fn field(&self, name: &str) -> &'a Value {
        self.data.get(name).unwrap_or(&NULL)
    }

    pub fn records(&self) -> &[T] {
        self.records.as_slice()
    }

    pub fn records_mut(&mut self) -> &mut Vec<T> {
        &mut *self.records
    }

    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }

    /// Remember the record at `index` for the rest of the pipeline
    pub fn locate(&mut self, index: usize) {
        self.located = Some(index);
    }

    pub fn located_index(&self) -> Option<usize> {
        self.located
    }

    /// The record found by the existence check
    pub fn located(&self) -> Result<&T, ApiError> {
        self.located
            .and_then(|index| self.records.get(index))
            .ok_or_else(|| missing_existence_check::<T>())
    }

    pub fn located_mut(&mut self) -> Result<&mut T, ApiError> {
        self.located
            .and_then(|index| self.records.get_mut(index))
            .ok_or_else(|| missing_existence_check::<T>())
    }

    /// Remove the located record from the store and return it
    pub fn remove_located(&mut self) -> Result<T, ApiError> {
        match self.located.take() {
            Some(index) if index < self.records.len() => Ok(self.records.remove(index)),
            _ => Err(missing_existence_check::<T>()),
        }
    }
}

fn missing_existence_check<T: Record>() -> ApiError {
    ApiError::internal(format!("no {} located for this request", T::KIND))
}

/// One step of a chain: pass, or fail with a status and message
///
/// Any function `fn(&mut RequestContext<'_, T>) -> Result<(), ApiError>` is a validator.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, ctx: &mut RequestContext<'_, T>) -> Result<(), ApiError>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&mut RequestContext<'_, T>) -> Result<(), ApiError> + Send + Sync,
{
    fn validate(&self, ctx: &mut RequestContext<'_, T>) -> Result<(), ApiError> {
        self(ctx)
    }
}

/// Ordered list of validators
pub struct Chain<T> {
    steps: Vec<Box<dyn Validator<T>>>,
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step
    pub fn then(mut self, step: impl Validator<T> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, stopping at the first failure
    pub fn run(&self, ctx: &mut RequestContext<'_, T>) -> Result<(), ApiError> {
        for step in &self.steps {
            step.validate(ctx)?;
        }
        Ok(())
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal step of a pipeline
pub type Handler<T> = fn(&mut RequestContext<'_, T>) -> Result<Reply, ApiError>;

/// A chain followed by the handler that runs when the chain passes
pub struct Pipeline<T> {
    name: &'static str,
    chain: Chain<T>,
    handler: Handler<T>,
}

impl<T: Record> Pipeline<T> {
    pub fn new(name: &'static str, chain: Chain<T>, handler: Handler<T>) -> Self {
        Self {
            name,
            chain,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn execute(&self, ctx: &mut RequestContext<'_, T>) -> Result<Reply, ApiError> {
        self.chain.run(ctx)?;
        (self.handler)(ctx)
    }
}
