//! # Identity Generation
//!
//! Every record gets its id from an [`IdGenerator`] at creation time. Generators
//! never look at the ids already in use, so they must be unique on their own.
//!
//! - [`UuidGenerator`] - random v4 UUIDs, the default.
//! - [`SequentialIdGenerator`] - `"{prefix}_{n}"` from an atomic counter, handy
//!   for readable logs and deterministic tests.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::model::RecordId;

/// Source of fresh record identifiers.
pub trait IdGenerator: Send + Sync + 'static {
    /// Returns an id that no earlier call on this generator has returned.
    fn next_id(&self) -> RecordId;
}

/// Produces random UUID v4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::from(Uuid::new_v4().to_string())
    }
}

/// Produces `"{prefix}_1"`, `"{prefix}_2"`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("product")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RecordId {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        RecordId::from(format!("{}_{}", self.prefix, id))
    }
}
