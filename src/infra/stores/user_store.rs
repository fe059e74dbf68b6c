//! User store: CRUD over user entities plus the role-membership,
//! password-hash, security-stamp, and email capability groups.
//!
//! One concrete adapter, [`SqlUserStore`], satisfies five orthogonal
//! capability traits. The `set_*` operations mutate the in-memory entity
//! only; callers persist them with a later `update` call.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
};

use super::required;
use crate::domain::{User, UserRole};
use crate::errors::{StoreError, StoreResult};
use crate::infra::entities::{role, user, user_role};
use crate::infra::entities::{RoleEntity, UserEntity, UserRoleEntity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Core user persistence contract.
///
/// Same shape as [`crate::infra::stores::RoleStore`], operating on users.
/// `find_*` also loads the user's association rows so the returned
/// `User.roles` collection is populated.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user row.
    async fn create(&self, user: &User) -> StoreResult<()>;

    /// Remove an existing user row.
    async fn delete(&self, user: &User) -> StoreResult<()>;

    /// Find a user by id, matching case-insensitively.
    async fn find_by_id(&self, user_id: &str) -> StoreResult<Option<User>>;

    /// Find a user by username, matching case-insensitively.
    async fn find_by_name(&self, user_name: &str) -> StoreResult<Option<User>>;

    /// Write the user row. A missing row is a silent no-op.
    async fn update(&self, user: &User) -> StoreResult<()>;
}

/// Role-membership capability.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRoleStore: Send + Sync {
    /// Assign the user to the named role.
    ///
    /// The role is looked up by exact name match; a missing role is an
    /// invalid-operation error and nothing is persisted.
    async fn add_to_role(&self, user: &User, role_name: &str) -> StoreResult<()>;

    /// Resolve the names of the roles in the user's loaded associations.
    async fn get_roles(&self, user: &User) -> StoreResult<Vec<String>>;

    /// True iff `role_name` appears among the resolved role names.
    async fn is_in_role(&self, user: &User, role_name: &str) -> StoreResult<bool>;

    /// Remove the user from the named role.
    ///
    /// The role is looked up case-insensitively; a missing role or a
    /// missing association completes successfully with no effect.
    async fn remove_from_role(&self, user: &User, role_name: &str) -> StoreResult<()>;
}

/// Password-hash capability. Mutations are in-memory only.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserPasswordStore: Send + Sync {
    /// Get the stored password hash, if any.
    async fn get_password_hash(&self, user: &User) -> StoreResult<Option<String>>;

    /// True iff the user carries a non-empty password hash.
    async fn has_password(&self, user: &User) -> StoreResult<bool>;

    /// Set the password hash on the in-memory entity. Persisted by a
    /// later `update`.
    async fn set_password_hash(&self, user: &mut User, password_hash: &str) -> StoreResult<()>;
}

/// Security-stamp capability. Mutations are in-memory only.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserSecurityStampStore: Send + Sync {
    /// Get the stored security stamp, if any.
    async fn get_security_stamp(&self, user: &User) -> StoreResult<Option<String>>;

    /// Set the security stamp on the in-memory entity. Persisted by a
    /// later `update`.
    async fn set_security_stamp(&self, user: &mut User, stamp: &str) -> StoreResult<()>;
}

/// Email capability. Mutations are in-memory only.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserEmailStore: Send + Sync {
    /// Find a user by email, matching case-insensitively.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Get the stored email address, if any.
    async fn get_email(&self, user: &User) -> StoreResult<Option<String>>;

    /// Get the email-confirmed flag.
    async fn get_email_confirmed(&self, user: &User) -> StoreResult<bool>;

    /// Set the email on the in-memory entity. Persisted by a later
    /// `update`.
    async fn set_email(&self, user: &mut User, email: &str) -> StoreResult<()>;

    /// Set the email-confirmed flag on the in-memory entity.
    async fn set_email_confirmed(&self, user: &mut User, confirmed: bool) -> StoreResult<()>;
}

/// SeaORM-backed user store implementing all five capability traits.
///
/// The connection handle is caller-owned; the store keeps a cheap clone
/// and never manages its lifecycle.
pub struct SqlUserStore {
    db: DatabaseConnection,
}

impl SqlUserStore {
    /// Create a new store over the given connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load one user row matching the filter and populate its
    /// association collection from the junction table.
    async fn load_user(&self, filter: SimpleExpr) -> StoreResult<Option<User>> {
        let Some(model) = UserEntity::find().filter(filter).one(&self.db).await? else {
            return Ok(None);
        };

        let links = model.find_related(UserRoleEntity).all(&self.db).await?;
        let mut user = User::from(model);
        user.roles = links.into_iter().map(UserRole::from).collect();
        Ok(Some(user))
    }

    /// Resolve role names for the ids in the user's loaded associations.
    ///
    /// An empty association set short-circuits without touching the
    /// database.
    async fn role_names_for(&self, user: &User) -> StoreResult<Vec<String>> {
        let role_ids: Vec<String> = user.roles.iter().map(|link| link.role_id.clone()).collect();
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = RoleEntity::find()
            .filter(role::Column::Id.is_in(role_ids))
            .all(&self.db)
            .await?;
        Ok(roles.into_iter().map(|r| r.name).collect())
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn create(&self, user: &User) -> StoreResult<()> {
        required(&user.id, "user.id")?;
        required(&user.user_name, "user.user_name")?;

        UserEntity::insert(user::ActiveModel::from(user))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, user: &User) -> StoreResult<()> {
        required(&user.id, "user.id")?;

        UserEntity::delete_by_id(user.id.clone())
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, user_id: &str) -> StoreResult<Option<User>> {
        required(user_id, "user_id")?;

        self.load_user(
            Expr::expr(Func::lower(Expr::col(user::Column::Id))).eq(user_id.to_lowercase()),
        )
        .await
    }

    async fn find_by_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        required(user_name, "user_name")?;

        self.load_user(
            Expr::expr(Func::lower(Expr::col(user::Column::UserName)))
                .eq(user_name.to_lowercase()),
        )
        .await
    }

    async fn update(&self, user: &User) -> StoreResult<()> {
        required(&user.id, "user.id")?;
        required(&user.user_name, "user.user_name")?;

        // Explicit whole-row write instead of attach-and-mark-modified
        // change tracking. Association rows are managed only through
        // add_to_role/remove_from_role. rows_affected 0 is still success.
        let mut row = user::ActiveModel::from(user);
        row.id = NotSet;
        UserEntity::update_many()
            .set(row)
            .filter(user::Column::Id.eq(user.id.as_str()))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UserRoleStore for SqlUserStore {
    async fn add_to_role(&self, user: &User, role_name: &str) -> StoreResult<()> {
        required(&user.id, "user.id")?;
        required(role_name, "role_name")?;

        // Exact-match lookup, unlike the case-insensitive finders; see
        // DESIGN.md.
        let role = RoleEntity::find()
            .filter(role::Column::Name.eq(role_name))
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::invalid_operation("role not found"))?;

        let link = UserRole::new(user.id.clone(), role.id);
        UserRoleEntity::insert(user_role::ActiveModel::from(&link))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn get_roles(&self, user: &User) -> StoreResult<Vec<String>> {
        required(&user.id, "user.id")?;

        self.role_names_for(user).await
    }

    async fn is_in_role(&self, user: &User, role_name: &str) -> StoreResult<bool> {
        required(&user.id, "user.id")?;
        required(role_name, "role_name")?;

        let names = self.role_names_for(user).await?;
        Ok(names.iter().any(|name| name == role_name))
    }

    async fn remove_from_role(&self, user: &User, role_name: &str) -> StoreResult<()> {
        required(&user.id, "user.id")?;
        required(role_name, "role_name")?;

        let Some(role) = RoleEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(role::Column::Name)))
                    .eq(role_name.to_lowercase()),
            )
            .one(&self.db)
            .await?
        else {
            // Unknown role: complete with no effect.
            return Ok(());
        };

        // First association by role id only; the user id is not part of
        // the predicate. See DESIGN.md.
        let Some(link) = UserRoleEntity::find()
            .filter(user_role::Column::RoleId.eq(role.id.as_str()))
            .one(&self.db)
            .await?
        else {
            return Ok(());
        };

        link.delete(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl UserPasswordStore for SqlUserStore {
    async fn get_password_hash(&self, user: &User) -> StoreResult<Option<String>> {
        required(&user.id, "user.id")?;

        Ok(user.password_hash.clone())
    }

    async fn has_password(&self, user: &User) -> StoreResult<bool> {
        required(&user.id, "user.id")?;

        Ok(user.has_password())
    }

    async fn set_password_hash(&self, user: &mut User, password_hash: &str) -> StoreResult<()> {
        required(&user.id, "user.id")?;
        required(password_hash, "password_hash")?;

        user.password_hash = Some(password_hash.to_owned());
        Ok(())
    }
}

#[async_trait]
impl UserSecurityStampStore for SqlUserStore {
    async fn get_security_stamp(&self, user: &User) -> StoreResult<Option<String>> {
        required(&user.id, "user.id")?;

        Ok(user.security_stamp.clone())
    }

    async fn set_security_stamp(&self, user: &mut User, stamp: &str) -> StoreResult<()> {
        required(&user.id, "user.id")?;
        required(stamp, "stamp")?;

        user.security_stamp = Some(stamp.to_owned());
        Ok(())
    }
}

#[async_trait]
impl UserEmailStore for SqlUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        required(email, "email")?;

        self.load_user(
            Expr::expr(Func::lower(Expr::col(user::Column::Email))).eq(email.to_lowercase()),
        )
        .await
    }

    async fn get_email(&self, user: &User) -> StoreResult<Option<String>> {
        required(&user.id, "user.id")?;

        Ok(user.email.clone())
    }

    async fn get_email_confirmed(&self, user: &User) -> StoreResult<bool> {
        required(&user.id, "user.id")?;

        Ok(user.email_confirmed)
    }

    async fn set_email(&self, user: &mut User, email: &str) -> StoreResult<()> {
        required(&user.id, "user.id")?;
        required(email, "email")?;

        user.email = Some(email.to_owned());
        Ok(())
    }

    async fn set_email_confirmed(&self, user: &mut User, confirmed: bool) -> StoreResult<()> {
        required(&user.id, "user.id")?;

        user.email_confirmed = confirmed;
        Ok(())
    }
}
