/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod in_memory_store;

// Re-exports for convenience
pub use in_memory_store::{InMemoryStore, StoredAggregate};
