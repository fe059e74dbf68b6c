//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod role;
pub mod user;
pub mod user_role;

// Re-exports for public API convenience
pub use role::{ActiveModel as RoleActiveModel, Entity as RoleEntity, Model as RoleModel};
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
pub use user_role::{
    ActiveModel as UserRoleActiveModel, Entity as UserRoleEntity, Model as UserRoleModel,
};
