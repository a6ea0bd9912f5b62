//! Permission evaluation engine.

use tracing::debug;
use warden_core::error::{WardenError, WardenResult};
use warden_core::models::role::Role;
use warden_core::repository::PermissionRepository;

use crate::lookup;

/// One requirement to evaluate: which resource, which actions, and
/// whether the lookup is instance-scoped or global.
///
/// The two variants are a closed set — dispatch happens by pattern
/// matching in [`resolve`](CheckSpec::resolve), decided when the spec
/// is constructed.
#[derive(Debug, Clone)]
pub enum CheckSpec {
    /// Evaluated against instance-scoped grants
    /// (`{resource}:{resource_id}:{action}`).
    Scoped {
        resource_name: String,
        resource_id: String,
        action_names: Vec<String>,
    },
    /// Evaluated against global grants (`{resource}:{action}`).
    Global {
        resource_name: String,
        action_names: Vec<String>,
    },
}

impl CheckSpec {
    pub fn scoped(
        resource_name: impl Into<String>,
        resource_id: impl Into<String>,
        action_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Scoped {
            resource_name: resource_name.into(),
            resource_id: resource_id.into(),
            action_names: action_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn global(
        resource_name: impl Into<String>,
        action_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Global {
            resource_name: resource_name.into(),
            action_names: action_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn action_names(&self) -> &[String] {
        match self {
            CheckSpec::Scoped { action_names, .. } | CheckSpec::Global { action_names, .. } => {
                action_names
            }
        }
    }

    /// Resolve this requirement for one role and one action name.
    async fn resolve<P: PermissionRepository>(
        &self,
        repo: &P,
        role: &Role,
        action_name: &str,
    ) -> WardenResult<bool> {
        match self {
            CheckSpec::Scoped {
                resource_name,
                resource_id,
                ..
            } => lookup::has_permission(repo, role, resource_name, resource_id, action_name).await,
            CheckSpec::Global { resource_name, .. } => {
                lookup::has_global_permission(repo, role, resource_name, action_name).await
            }
        }
    }
}

/// Evaluation engine for one authorization decision.
///
/// Immutable once constructed: a store handle, the actor's roles in
/// order, an optional bypass role name, and the requirements to
/// evaluate. Built per request and discarded after
/// [`check`](Self::check) returns; never shared across requests.
pub struct PermissionChecker<'a, P: PermissionRepository> {
    repo: &'a P,
    roles: Vec<Role>,
    bypass_role: Option<String>,
    checks: Vec<CheckSpec>,
}

impl<'a, P: PermissionRepository> PermissionChecker<'a, P> {
    pub fn new(
        repo: &'a P,
        roles: Vec<Role>,
        bypass_role: Option<String>,
        checks: Vec<CheckSpec>,
    ) -> Self {
        Self {
            repo,
            roles,
            bypass_role,
            checks,
        }
    }

    /// Evaluate the requirements against the actor's roles.
    ///
    /// A holder of the bypass role passes unconditionally, before any
    /// lookup runs. Otherwise, with `either = false` (the default
    /// policy) a single role must satisfy every action of every
    /// requirement — permissions are not combined across roles. With
    /// `either = true` one satisfied (role, requirement, action)
    /// triple anywhere in the cross product is enough.
    ///
    /// Failure is never a plain boolean: an unsatisfied policy is
    /// reported as [`WardenError::Unauthorized`], so an `Ok` return
    /// always means the decision passed.
    pub async fn check(&self, either: bool) -> WardenResult<()> {
        if let Some(bypass) = &self.bypass_role {
            if self.roles.iter().any(|role| role.name == *bypass) {
                debug!(bypass_role = %bypass, "Bypass role held, skipping evaluation");
                return Ok(());
            }
        }

        if either {
            for role in &self.roles {
                for spec in &self.checks {
                    for action_name in spec.action_names() {
                        if spec.resolve(self.repo, role, action_name).await? {
                            return Ok(());
                        }
                    }
                }
            }
            return Err(Self::unauthorized());
        }

        'roles: for role in &self.roles {
            for spec in &self.checks {
                for action_name in spec.action_names() {
                    if !spec.resolve(self.repo, role, action_name).await? {
                        continue 'roles;
                    }
                }
            }
            // This role satisfied the whole conjunction.
            return Ok(());
        }

        Err(Self::unauthorized())
    }

    fn unauthorized() -> WardenError {
        WardenError::Unauthorized {
            reason: "not authorized to access this resource".into(),
        }
    }
}
