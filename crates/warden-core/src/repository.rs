//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations live in the
//! database crate; the authorization layer is generic over these traits
//! and never touches the store directly.

use uuid::Uuid;

use crate::error::WardenResult;
use crate::models::permission::{NewPermission, Permission};
use crate::models::role::{CreateRole, Role};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

pub trait RoleRepository: Send + Sync {
    fn create(&self, input: CreateRole) -> impl Future<Output = WardenResult<Role>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = WardenResult<Role>> + Send;
    fn get_by_name(&self, name: &str) -> impl Future<Output = WardenResult<Role>> + Send;
    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = WardenResult<PaginatedResult<Role>>> + Send;
    /// Remove a role and every grant it holds.
    fn delete(&self, id: Uuid) -> impl Future<Output = WardenResult<()>> + Send;
}

pub trait PermissionRepository: Send + Sync {
    /// Persist a pre-built grant, returning the stored record with the
    /// store's generated timestamps. Surfaces Conflict when the
    /// (role_id, name) unique index rejects the insert.
    fn insert(
        &self,
        record: NewPermission,
    ) -> impl Future<Output = WardenResult<Permission>> + Send;

    /// First permission where role_id = X and name = Y — the single
    /// query primitive the lookup functions and the evaluation engine
    /// are built on.
    fn find_by_role_and_name(
        &self,
        role_id: Uuid,
        name: &str,
    ) -> impl Future<Output = WardenResult<Option<Permission>>> + Send;

    fn list_by_role(
        &self,
        role_id: Uuid,
    ) -> impl Future<Output = WardenResult<Vec<Permission>>> + Send;

    /// Administrative removal. The grant manager has no revoke
    /// operation; deleting a grant happens only through this call.
    fn delete(&self, id: Uuid) -> impl Future<Output = WardenResult<()>> + Send;
}
