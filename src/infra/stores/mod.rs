//! Store layer - capability traits and their SeaORM-backed adapters.
//!
//! Each store is a thin pass-through: validate arguments, issue exactly
//! one database operation (plus at most one auxiliary lookup), return the
//! result. No caching, batching, locking, or retry lives here.

mod role_store;
mod user_store;

pub use role_store::{RoleStore, SqlRoleStore};
pub use user_store::{
    SqlUserStore, UserEmailStore, UserPasswordStore, UserRoleStore, UserSecurityStampStore,
    UserStore,
};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use role_store::MockRoleStore;
#[cfg(any(test, feature = "test-utils"))]
pub use user_store::{
    MockUserEmailStore, MockUserPasswordStore, MockUserRoleStore, MockUserSecurityStampStore,
    MockUserStore,
};

use crate::errors::{StoreError, StoreResult};

/// Reject empty required string arguments before any I/O.
pub(crate) fn required(value: &str, name: &'static str) -> StoreResult<()> {
    if value.is_empty() {
        return Err(StoreError::invalid_argument(name));
    }
    Ok(())
}
