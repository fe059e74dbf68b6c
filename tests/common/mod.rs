//! Shared helpers for the mock-database tests.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Restores `.clone()` for mock connections.
///
/// sea-orm's `mock` feature removes the `Clone` derive from
/// `DatabaseConnection`, but a mock connection is an `Arc` handle, so an
/// equivalent clone can be rebuilt from the variant. Both handles share the
/// same transaction log, letting a test keep one for assertions while the
/// store owns the other.
pub trait CloneMockConnection {
    fn clone(&self) -> Self;
}

impl CloneMockConnection for DatabaseConnection {
    fn clone(&self) -> Self {
        match self {
            DatabaseConnection::MockDatabaseConnection(conn) => {
                DatabaseConnection::MockDatabaseConnection(Arc::clone(conn))
            }
            _ => panic!("expected a mock database connection"),
        }
    }
}
