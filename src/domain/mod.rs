//! Domain layer - identity entities and id generation.
//!
//! These types represent identity concepts independent of the database
//! schema; the infrastructure layer converts them to and from SeaORM
//! entities.

pub mod id;
pub mod role;
pub mod user;

pub use id::{IdProvider, UuidProvider};
pub use role::Role;
pub use user::{User, UserRole};
