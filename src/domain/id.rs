//! Identifier generation for new entities.

use uuid::Uuid;

/// Provider of collision-resistant entity identifiers.
///
/// Injectable so tests can substitute a deterministic source.
pub trait IdProvider: Send + Sync {
    /// Produce a new unique identifier.
    fn generate(&self) -> String;
}

/// Default provider backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
