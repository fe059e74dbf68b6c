//! User domain entity and its role association.

use serde::{Deserialize, Serialize};

use crate::domain::id::{IdProvider, UuidProvider};

/// Association record linking a user id to a role id.
///
/// Composite identity: the (user_id, role_id) pair. At most one
/// association per pair is expected, though this layer does not enforce
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: String,
    pub role_id: String,
}

impl UserRole {
    /// Create a new association between a user and a role.
    pub fn new(user_id: impl Into<String>, role_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role_id: role_id.into(),
        }
    }
}

/// User domain entity.
///
/// The `roles` collection holds the association rows loaded alongside the
/// user; the membership queries (`get_roles`, `is_in_role`) resolve role
/// names from it rather than re-reading the junction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub security_stamp: Option<String>,
    pub email: Option<String>,
    pub email_confirmed: bool,
    pub access_failed_count: i32,
    pub roles: Vec<UserRole>,
}

impl User {
    /// Create a new user with a generated random id.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self::with_provider(&UuidProvider, user_name)
    }

    /// Create a new user drawing its id from the given provider.
    pub fn with_provider(ids: &dyn IdProvider, user_name: impl Into<String>) -> Self {
        Self {
            id: ids.generate(),
            user_name: user_name.into(),
            password_hash: None,
            security_stamp: None,
            email: None,
            email_confirmed: false,
            access_failed_count: 0,
            roles: Vec::new(),
        }
    }

    /// Create a user with an explicit id, e.g. one loaded from storage.
    pub fn with_id(id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new(user_name)
        }
    }

    /// True iff the user carries a non-empty password hash.
    pub fn has_password(&self) -> bool {
        self.password_hash.as_deref().is_some_and(|hash| !hash.is_empty())
    }
}
