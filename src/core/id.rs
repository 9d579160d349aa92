//! Identifier generation for newly created records

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces a fresh identifier on every call.
///
/// Implementations must never hand out the same id twice for the lifetime
/// of the process, across every store that shares the generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Default generator: 32 lowercase hex characters from a random v4 UUID
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic generator yielding `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        if self.prefix.is_empty() {
            n.to_string()
        } else {
            format!("{}-{}", self.prefix, n)
        }
    }
}
