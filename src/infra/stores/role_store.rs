//! Role store: CRUD over role entities.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::required;
use crate::domain::Role;
use crate::errors::StoreResult;
use crate::infra::entities::role::{self, ActiveModel};
use crate::infra::entities::RoleEntity;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role persistence contract.
///
/// Lookup misses are `Ok(None)`; only empty arguments and backend
/// failures produce errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Persist a new role.
    async fn create(&self, role: &Role) -> StoreResult<()>;

    /// Remove an existing role.
    async fn delete(&self, role: &Role) -> StoreResult<()>;

    /// Find a role by id, matching case-insensitively.
    async fn find_by_id(&self, role_id: &str) -> StoreResult<Option<Role>>;

    /// Find a role by name, matching case-insensitively.
    async fn find_by_name(&self, role_name: &str) -> StoreResult<Option<Role>>;

    /// Write the role row. A missing row is a silent no-op.
    async fn update(&self, role: &Role) -> StoreResult<()>;
}

/// SeaORM-backed role store.
///
/// The connection handle is caller-owned; the store keeps a cheap clone
/// and never manages its lifecycle.
pub struct SqlRoleStore {
    db: DatabaseConnection,
}

impl SqlRoleStore {
    /// Create a new store over the given connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleStore for SqlRoleStore {
    async fn create(&self, role: &Role) -> StoreResult<()> {
        required(&role.id, "role.id")?;
        required(&role.name, "role.name")?;

        RoleEntity::insert(ActiveModel::from(role))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, role: &Role) -> StoreResult<()> {
        required(&role.id, "role.id")?;

        RoleEntity::delete_by_id(role.id.clone())
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, role_id: &str) -> StoreResult<Option<Role>> {
        required(role_id, "role_id")?;

        let found = RoleEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(role::Column::Id))).eq(role_id.to_lowercase()))
            .one(&self.db)
            .await?;
        Ok(found.map(Role::from))
    }

    async fn find_by_name(&self, role_name: &str) -> StoreResult<Option<Role>> {
        required(role_name, "role_name")?;

        let found = RoleEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(role::Column::Name)))
                    .eq(role_name.to_lowercase()),
            )
            .one(&self.db)
            .await?;
        Ok(found.map(Role::from))
    }

    async fn update(&self, role: &Role) -> StoreResult<()> {
        required(&role.id, "role.id")?;
        required(&role.name, "role.name")?;

        // Explicit whole-row write instead of attach-and-mark-modified
        // change tracking. rows_affected 0 (absent row) is still success.
        RoleEntity::update_many()
            .col_expr(role::Column::Name, Expr::value(role.name.clone()))
            .filter(role::Column::Id.eq(role.id.as_str()))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
