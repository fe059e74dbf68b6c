//! SeaORM-backed identity stores.
//!
//! Adapts a relational database to the storage contracts of a generic
//! identity-management framework: role CRUD, user CRUD, and the
//! role-membership, password-hash, security-stamp, and email capability
//! groups layered on the user store.
//!
//! # Architecture Layers
//!
//! - **config**: environment-driven settings
//! - **domain**: Role/User/UserRole entities and id generation
//! - **errors**: centralized error handling
//! - **infra**: SeaORM entities, connection wrapper, store adapters
//!
//! The database connection is caller-owned; stores hold a cheap-clone
//! handle and issue exactly one statement per mutating call. In-memory
//! `set_*` mutations reach the database only through a later explicit
//! `update`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use config::StoreConfig;
pub use domain::{IdProvider, Role, User, UserRole, UuidProvider};
pub use errors::{StoreError, StoreResult};
pub use infra::{
    Database, RoleStore, SqlRoleStore, SqlUserStore, UserEmailStore, UserPasswordStore,
    UserRoleStore, UserSecurityStampStore, UserStore,
};
