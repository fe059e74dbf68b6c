//! Role store behavior against a mock database.
//!
//! The mock returns canned rows, so these tests pin down delegation
//! shape: which calls reach the database, how many statements each
//! operation issues, and that validation happens before any I/O.

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

mod common;
use common::CloneMockConnection;

use identity_stores::infra::entities::role;
use identity_stores::{Role, RoleStore, SqlRoleStore, StoreError};

fn admin_model() -> role::Model {
    role::Model {
        id: "role-1".to_string(),
        name: "Admin".to_string(),
    }
}

#[tokio::test]
async fn create_persists_the_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let store = SqlRoleStore::new(db.clone());

    let role = Role::with_id("role-1", "Admin");
    store.create(&role).await.unwrap();

    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn create_rejects_a_blank_name_before_io() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = SqlRoleStore::new(db.clone());

    let role = Role::with_id("role-1", "");
    let err = store.create(&role).await.unwrap_err();

    assert!(matches!(err, StoreError::InvalidArgument("role.name")));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn create_rejects_a_blank_id_before_io() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = SqlRoleStore::new(db.clone());

    let role = Role::with_id("", "Admin");
    let err = store.create(&role).await.unwrap_err();

    assert!(matches!(err, StoreError::InvalidArgument("role.id")));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn find_by_id_returns_the_mapped_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![admin_model()]])
        .into_connection();
    let store = SqlRoleStore::new(db);

    let found = store.find_by_id("ROLE-1").await.unwrap();

    assert_eq!(found, Some(Role::with_id("role-1", "Admin")));
}

#[tokio::test]
async fn find_by_id_miss_is_a_successful_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<role::Model>::new()])
        .into_connection();
    let store = SqlRoleStore::new(db);

    let found = store.find_by_id("missing").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn find_by_id_rejects_an_empty_id_before_io() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = SqlRoleStore::new(db.clone());

    let err = store.find_by_id("").await.unwrap_err();

    assert!(matches!(err, StoreError::InvalidArgument("role_id")));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn find_by_name_returns_the_mapped_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![admin_model()]])
        .into_connection();
    let store = SqlRoleStore::new(db);

    let found = store.find_by_name("admin").await.unwrap();

    assert_eq!(found.map(|r| r.name), Some("Admin".to_string()));
}

#[tokio::test]
async fn find_by_name_rejects_an_empty_name_before_io() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = SqlRoleStore::new(db.clone());

    let err = store.find_by_name("").await.unwrap_err();

    assert!(matches!(err, StoreError::InvalidArgument("role_name")));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn delete_issues_a_single_statement() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let store = SqlRoleStore::new(db.clone());

    let role = Role::with_id("role-1", "Admin");
    store.delete(&role).await.unwrap();

    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn update_on_a_missing_row_is_a_silent_noop() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let store = SqlRoleStore::new(db.clone());

    let role = Role::with_id("ghost", "Ghost");
    store.update(&role).await.unwrap();

    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn update_rejects_a_blank_id_before_io() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = SqlRoleStore::new(db.clone());

    let role = Role::with_id("", "Admin");
    let err = store.update(&role).await.unwrap_err();

    assert!(matches!(err, StoreError::InvalidArgument("role.id")));
    assert!(db.into_transaction_log().is_empty());
}
