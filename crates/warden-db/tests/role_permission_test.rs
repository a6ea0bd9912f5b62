//! Integration tests for the Role and Permission repositories using
//! in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;
use warden_core::error::WardenError;
use warden_core::models::permission::NewPermission;
use warden_core::models::role::CreateRole;
use warden_core::repository::{Pagination, PermissionRepository, RoleRepository};
use warden_db::repository::{SurrealPermissionRepository, SurrealRoleRepository};

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    warden_db::run_migrations(&db).await.unwrap();
    db
}

fn new_grant(role_id: Uuid, name: &str) -> NewPermission {
    NewPermission {
        id: Uuid::new_v4(),
        role_id,
        name: name.into(),
    }
}

// ---------------------------------------------------------------------------
// Role tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_role() {
    let db = setup().await;
    let repo = SurrealRoleRepository::new(db);

    let role = repo
        .create(CreateRole {
            name: "admin".into(),
            description: "Administrator".into(),
        })
        .await
        .unwrap();

    assert_eq!(role.name, "admin");
    assert_eq!(role.description, "Administrator");

    let fetched = repo.get_by_id(role.id).await.unwrap();
    assert_eq!(fetched.id, role.id);
    assert_eq!(fetched.name, "admin");
}

#[tokio::test]
async fn get_role_by_name() {
    let db = setup().await;
    let repo = SurrealRoleRepository::new(db);

    let role = repo
        .create(CreateRole {
            name: "editor".into(),
            description: "Can edit".into(),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_name("editor").await.unwrap();
    assert_eq!(fetched.id, role.id);

    let missing = repo.get_by_name("nonexistent").await;
    assert!(matches!(missing, Err(WardenError::NotFound { .. })));
}

#[tokio::test]
async fn get_missing_role_not_found() {
    let db = setup().await;
    let repo = SurrealRoleRepository::new(db);

    let result = repo.get_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(WardenError::NotFound { .. })));
}

#[tokio::test]
async fn duplicate_role_name_rejected() {
    let db = setup().await;
    let repo = SurrealRoleRepository::new(db);

    repo.create(CreateRole {
        name: "unique-role".into(),
        description: "first".into(),
    })
    .await
    .unwrap();

    let result = repo
        .create(CreateRole {
            name: "unique-role".into(),
            description: "second".into(),
        })
        .await;

    assert!(matches!(result, Err(WardenError::Conflict { .. })));
}

#[tokio::test]
async fn list_roles_with_pagination() {
    let db = setup().await;
    let repo = SurrealRoleRepository::new(db);

    for i in 0..5 {
        repo.create(CreateRole {
            name: format!("role-{i}"),
            description: format!("Role {i}"),
        })
        .await
        .unwrap();
    }

    let page1 = repo
        .list(Pagination {
            offset: 0,
            limit: 3,
        })
        .await
        .unwrap();

    assert_eq!(page1.items.len(), 3);
    assert_eq!(page1.total, 5);

    let page2 = repo
        .list(Pagination {
            offset: 3,
            limit: 3,
        })
        .await
        .unwrap();

    assert_eq!(page2.items.len(), 2);
}

#[tokio::test]
async fn delete_role_removes_its_grants() {
    let db = setup().await;
    let role_repo = SurrealRoleRepository::new(db.clone());
    let perm_repo = SurrealPermissionRepository::new(db);

    let role = role_repo
        .create(CreateRole {
            name: "to-delete".into(),
            description: "temp".into(),
        })
        .await
        .unwrap();

    perm_repo
        .insert(new_grant(role.id, "document:read"))
        .await
        .unwrap();

    role_repo.delete(role.id).await.unwrap();

    let result = role_repo.get_by_id(role.id).await;
    assert!(result.is_err(), "deleted role should not be found");

    let grants = perm_repo.list_by_role(role.id).await.unwrap();
    assert!(grants.is_empty(), "grants should go with the role");
}

// ---------------------------------------------------------------------------
// Permission tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_and_find_permission() {
    let db = setup().await;
    let role_repo = SurrealRoleRepository::new(db.clone());
    let perm_repo = SurrealPermissionRepository::new(db);

    let role = role_repo
        .create(CreateRole {
            name: "viewer".into(),
            description: "Can view".into(),
        })
        .await
        .unwrap();

    let stored = perm_repo
        .insert(new_grant(role.id, "document:read"))
        .await
        .unwrap();

    assert_eq!(stored.role_id, role.id);
    assert_eq!(stored.name, "document:read");

    let found = perm_repo
        .find_by_role_and_name(role.id, "document:read")
        .await
        .unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, stored.id);
}

#[tokio::test]
async fn find_missing_permission_returns_none() {
    let db = setup().await;
    let role_repo = SurrealRoleRepository::new(db.clone());
    let perm_repo = SurrealPermissionRepository::new(db);

    let role = role_repo
        .create(CreateRole {
            name: "viewer".into(),
            description: "Can view".into(),
        })
        .await
        .unwrap();

    let found = perm_repo
        .find_by_role_and_name(role.id, "document:read")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn duplicate_grant_rejected_by_index() {
    let db = setup().await;
    let role_repo = SurrealRoleRepository::new(db.clone());
    let perm_repo = SurrealPermissionRepository::new(db);

    let role = role_repo
        .create(CreateRole {
            name: "viewer".into(),
            description: "Can view".into(),
        })
        .await
        .unwrap();

    perm_repo
        .insert(new_grant(role.id, "document:read"))
        .await
        .unwrap();

    // Same (role_id, name) under a fresh record id still conflicts.
    let result = perm_repo.insert(new_grant(role.id, "document:read")).await;
    assert!(matches!(result, Err(WardenError::Conflict { .. })));
}

#[tokio::test]
async fn same_name_for_different_roles_allowed() {
    let db = setup().await;
    let role_repo = SurrealRoleRepository::new(db.clone());
    let perm_repo = SurrealPermissionRepository::new(db);

    let role_a = role_repo
        .create(CreateRole {
            name: "role-a".into(),
            description: "a".into(),
        })
        .await
        .unwrap();
    let role_b = role_repo
        .create(CreateRole {
            name: "role-b".into(),
            description: "b".into(),
        })
        .await
        .unwrap();

    perm_repo
        .insert(new_grant(role_a.id, "document:read"))
        .await
        .unwrap();
    perm_repo
        .insert(new_grant(role_b.id, "document:read"))
        .await
        .unwrap();

    assert!(
        perm_repo
            .find_by_role_and_name(role_b.id, "document:read")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn list_permissions_by_role() {
    let db = setup().await;
    let role_repo = SurrealRoleRepository::new(db.clone());
    let perm_repo = SurrealPermissionRepository::new(db);

    let role = role_repo
        .create(CreateRole {
            name: "editor".into(),
            description: "Can edit".into(),
        })
        .await
        .unwrap();

    perm_repo
        .insert(new_grant(role.id, "document:read"))
        .await
        .unwrap();
    perm_repo
        .insert(new_grant(role.id, "document:update"))
        .await
        .unwrap();

    let grants = perm_repo.list_by_role(role.id).await.unwrap();
    assert_eq!(grants.len(), 2);

    let names: Vec<&str> = grants.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&"document:read"));
    assert!(names.contains(&"document:update"));
}

#[tokio::test]
async fn delete_permission() {
    let db = setup().await;
    let role_repo = SurrealRoleRepository::new(db.clone());
    let perm_repo = SurrealPermissionRepository::new(db);

    let role = role_repo
        .create(CreateRole {
            name: "temp-role".into(),
            description: "temp".into(),
        })
        .await
        .unwrap();

    let stored = perm_repo
        .insert(new_grant(role.id, "document:delete"))
        .await
        .unwrap();

    perm_repo.delete(stored.id).await.unwrap();

    let found = perm_repo
        .find_by_role_and_name(role.id, "document:delete")
        .await
        .unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Migration tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn migrations_are_idempotent() {
    let db = setup().await;
    // A second run must be a no-op, not an error.
    warden_db::run_migrations(&db).await.unwrap();
}
