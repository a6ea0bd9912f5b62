//! SurrealDB implementation of [`PermissionRepository`].

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;
use warden_core::error::WardenResult;
use warden_core::models::permission::{NewPermission, Permission};
use warden_core::repository::PermissionRepository;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct PermissionRow {
    role_id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct PermissionRowWithId {
    record_id: String,
    role_id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PermissionRowWithId {
    fn try_into_permission(self) -> Result<Permission, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Migration(format!("invalid UUID: {e}")))?;
        let role_id = Uuid::parse_str(&self.role_id)
            .map_err(|e| DbError::Migration(format!("invalid role UUID: {e}")))?;
        Ok(Permission {
            id,
            role_id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Permission repository.
#[derive(Clone)]
pub struct SurrealPermissionRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealPermissionRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> PermissionRepository for SurrealPermissionRepository<C> {
    async fn insert(&self, record: NewPermission) -> WardenResult<Permission> {
        let id_str = record.id.to_string();
        let name = record.name.clone();

        let result = self
            .db
            .query(
                "CREATE type::record('permission', $id) SET \
                 role_id = $role_id, name = $name",
            )
            .bind(("id", id_str.clone()))
            .bind(("role_id", record.role_id.to_string()))
            .bind(("name", record.name))
            .await
            .map_err(DbError::from)?;

        // The only constraint on this table is the (role_id, name)
        // unique index, so a rejected statement is a duplicate grant.
        let mut result = result.check().map_err(|_| DbError::Conflict {
            entity: "permission".into(),
            name,
        })?;

        let rows: Vec<PermissionRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "permission".into(),
            id: id_str,
        })?;

        let role_id = Uuid::parse_str(&row.role_id)
            .map_err(|e| DbError::Migration(format!("invalid role UUID: {e}")))?;

        Ok(Permission {
            id: record.id,
            role_id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    async fn find_by_role_and_name(
        &self,
        role_id: Uuid,
        name: &str,
    ) -> WardenResult<Option<Permission>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM permission \
                 WHERE role_id = $role_id AND name = $name LIMIT 1",
            )
            .bind(("role_id", role_id.to_string()))
            .bind(("name", name.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PermissionRowWithId> = result.take(0).map_err(DbError::from)?;

        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.try_into_permission())
            .transpose()?)
    }

    async fn list_by_role(&self, role_id: Uuid) -> WardenResult<Vec<Permission>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM permission \
                 WHERE role_id = $role_id \
                 ORDER BY created_at ASC",
            )
            .bind(("role_id", role_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PermissionRowWithId> = result.take(0).map_err(DbError::from)?;

        let permissions = rows
            .into_iter()
            .map(|row| row.try_into_permission())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(permissions)
    }

    async fn delete(&self, id: Uuid) -> WardenResult<()> {
        self.db
            .query("DELETE type::record('permission', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
