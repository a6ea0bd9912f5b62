//! Permission (grant) domain model.
//!
//! A permission authorizes one role to perform one action on one
//! resource. The `name` field carries the canonical colon-delimited
//! encoding used as the lookup key:
//!
//! - global grant: `{resource}:{action}`
//! - instance-scoped grant: `{resource}:{resource_id}:{action}`
//!
//! At most one permission exists per (role_id, name) pair. Grants are
//! immutable once created; removal is an administrative repository
//! operation, not part of the grant manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: Uuid,
    /// The role this grant belongs to.
    pub role_id: Uuid,
    /// Canonical name, e.g. `document:read` or `document:doc-1:read`.
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A grant that has been built but not yet persisted.
///
/// The grant manager constructs these; a staged grant is finalized via
/// [`PermissionRepository::insert`](crate::repository::PermissionRepository::insert)
/// when the caller closes its transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPermission {
    pub id: Uuid,
    pub role_id: Uuid,
    pub name: String,
}

impl NewPermission {
    /// Materialize as a [`Permission`] with locally stamped timestamps.
    ///
    /// The store replaces the timestamps with its own when the record
    /// is eventually inserted.
    pub fn into_unsaved(self) -> Permission {
        let now = Utc::now();
        Permission {
            id: self.id,
            role_id: self.role_id,
            name: self.name,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<&Permission> for NewPermission {
    fn from(record: &Permission) -> Self {
        Self {
            id: record.id,
            role_id: record.role_id,
            name: record.name.clone(),
        }
    }
}
