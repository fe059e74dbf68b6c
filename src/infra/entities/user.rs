//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub user_name: String,
    pub password_hash: Option<String>,
    pub security_stamp: Option<String>,
    pub email: Option<String>,
    pub email_confirmed: bool,
    pub access_failed_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// The association collection starts empty; the store populates it from
/// the junction table when it loads a user.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            user_name: model.user_name,
            password_hash: model.password_hash,
            security_stamp: model.security_stamp,
            email: model.email,
            email_confirmed: model.email_confirmed,
            access_failed_count: model.access_failed_count,
            roles: Vec::new(),
        }
    }
}

/// Build a fully-set active model from a domain entity.
///
/// Association rows are managed separately through the junction table.
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: Set(user.id.clone()),
            user_name: Set(user.user_name.clone()),
            password_hash: Set(user.password_hash.clone()),
            security_stamp: Set(user.security_stamp.clone()),
            email: Set(user.email.clone()),
            email_confirmed: Set(user.email_confirmed),
            access_failed_count: Set(user.access_failed_count),
        }
    }
}
