//! Identifier generation for the in-memory store
//!
//! The MongoDB-backed store assigns its own ids at insert time, so this
//! generator is only wired into [`crate::memory::InMemoryProductRepository`].

use uuid::Uuid;

/// Generates unique, opaque product identifiers.
///
/// Backed by UUID v7: unique for the lifetime of the process (and beyond),
/// time-ordered, never reused after deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Produce a fresh identifier, unique among all ids ever issued.
    pub fn generate(&self) -> Uuid {
        Uuid::now_v7()
    }
}
