//! Boolean permission lookups.
//!
//! Pure reads against the permission store: a miss is `Ok(false)`,
//! never an error. Grant state is read fresh on every call — there is
//! no caching layer in front of the store.

use warden_core::error::WardenResult;
use warden_core::models::role::Role;
use warden_core::repository::PermissionRepository;

use crate::actions::ACTION_CRUD;

/// Canonical name of a global grant.
pub fn global_name(resource_name: &str, action_name: &str) -> String {
    format!("{resource_name}:{action_name}")
}

/// Canonical name of an instance-scoped grant.
pub fn scoped_name(resource_name: &str, resource_id: &str, action_name: &str) -> String {
    format!("{resource_name}:{resource_id}:{action_name}")
}

/// Does `role` hold the instance-scoped grant for this action?
pub async fn has_permission<P: PermissionRepository>(
    repo: &P,
    role: &Role,
    resource_name: &str,
    resource_id: &str,
    action_name: &str,
) -> WardenResult<bool> {
    let name = scoped_name(resource_name, resource_id, action_name);
    Ok(repo.find_by_role_and_name(role.id, &name).await?.is_some())
}

/// Does `role` hold the global grant for this action?
pub async fn has_global_permission<P: PermissionRepository>(
    repo: &P,
    role: &Role,
    resource_name: &str,
    action_name: &str,
) -> WardenResult<bool> {
    let name = global_name(resource_name, action_name);
    Ok(repo.find_by_role_and_name(role.id, &name).await?.is_some())
}

/// Shorthand for the [`ACTION_CRUD`] aggregate on a specific instance.
pub async fn has_crud_permission<P: PermissionRepository>(
    repo: &P,
    role: &Role,
    resource_name: &str,
    resource_id: &str,
) -> WardenResult<bool> {
    has_permission(repo, role, resource_name, resource_id, ACTION_CRUD).await
}

/// Shorthand for the [`ACTION_CRUD`] aggregate on a resource type.
pub async fn has_global_crud_permission<P: PermissionRepository>(
    repo: &P,
    role: &Role,
    resource_name: &str,
) -> WardenResult<bool> {
    has_global_permission(repo, role, resource_name, ACTION_CRUD).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(global_name("document", "read"), "document:read");
        assert_eq!(
            scoped_name("document", "doc-1", "read"),
            "document:doc-1:read"
        );
    }
}
