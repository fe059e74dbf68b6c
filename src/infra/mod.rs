//! Infrastructure layer - database integration
//!
//! This module holds everything that touches SeaORM:
//! - Connection wrapper
//! - Entity definitions mapping the identity tables
//! - Store implementations of the capability traits

pub mod db;
pub mod entities;
pub mod stores;

pub use db::Database;
pub use stores::{
    RoleStore, SqlRoleStore, SqlUserStore, UserEmailStore, UserPasswordStore, UserRoleStore,
    UserSecurityStampStore, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use stores::{
    MockRoleStore, MockUserEmailStore, MockUserPasswordStore, MockUserRoleStore,
    MockUserSecurityStampStore, MockUserStore,
};
