//! Grant manager — creation of global and instance-scoped grants.

use uuid::Uuid;
use warden_core::error::{WardenError, WardenResult};
use warden_core::models::permission::{NewPermission, Permission};
use warden_core::models::role::Role;
use warden_core::repository::{PermissionRepository, RoleRepository};

use crate::lookup::{global_name, scoped_name};

/// Grant manager.
///
/// Generic over repository implementations so the grant layer has no
/// dependency on the database crate. The duplicate check here is a
/// read followed by an insert, not an atomic operation; the store's
/// (role_id, name) unique index decides the race when two callers
/// create the same grant concurrently.
pub struct GrantService<R: RoleRepository, P: PermissionRepository> {
    role_repo: R,
    permission_repo: P,
}

impl<R: RoleRepository, P: PermissionRepository> GrantService<R, P> {
    pub fn new(role_repo: R, permission_repo: P) -> Self {
        Self {
            role_repo,
            permission_repo,
        }
    }

    /// Create a global grant `{resource}:{action}` for a role.
    ///
    /// Fails with NotFound when `role_id` does not resolve to an
    /// existing role, and with Conflict when the role already holds
    /// this grant. With `commit = false` the record is only staged: it
    /// is returned unpersisted, and the caller finalizes it through
    /// [`PermissionRepository::insert`] at its own transaction
    /// boundary.
    pub async fn create_global_grant(
        &self,
        role_id: Uuid,
        resource_name: &str,
        action_name: &str,
        commit: bool,
    ) -> WardenResult<Permission> {
        // 1. The target role must exist.
        let role = self.role_repo.get_by_id(role_id).await?;

        let name = global_name(resource_name, action_name);
        self.create_named_grant(role.id, name, commit).await
    }

    /// Create an instance-scoped grant `{resource}:{resource_id}:{action}`
    /// for the acting role.
    ///
    /// `actor_role` is the role resolved by upstream authorization;
    /// `None` means that resolution failed and the call is rejected
    /// with Unauthorized. Conflict and commit/stage behavior match
    /// [`create_global_grant`](Self::create_global_grant).
    pub async fn create_grant(
        &self,
        actor_role: Option<&Role>,
        resource_name: &str,
        resource_id: &str,
        action_name: &str,
        commit: bool,
    ) -> WardenResult<Permission> {
        // 1. The caller must have resolved a role upstream.
        let role = actor_role.ok_or_else(|| WardenError::Unauthorized {
            reason: "not authorized to access this resource".into(),
        })?;

        let name = scoped_name(resource_name, resource_id, action_name);
        self.create_named_grant(role.id, name, commit).await
    }

    /// Shared check-then-insert path for both grant kinds.
    async fn create_named_grant(
        &self,
        role_id: Uuid,
        name: String,
        commit: bool,
    ) -> WardenResult<Permission> {
        // 2. Reject duplicates up front for a precise Conflict error.
        if self
            .permission_repo
            .find_by_role_and_name(role_id, &name)
            .await?
            .is_some()
        {
            return Err(WardenError::Conflict {
                entity: "permission".into(),
                name,
            });
        }

        let record = NewPermission {
            id: Uuid::new_v4(),
            role_id,
            name,
        };

        if commit {
            // 3. Persist now; the store re-reads the row so generated
            //    timestamps come back materialized.
            self.permission_repo.insert(record).await
        } else {
            // 3. Stage only — nothing is written until the caller
            //    inserts the returned record itself.
            Ok(record.into_unsaved())
        }
    }
}
