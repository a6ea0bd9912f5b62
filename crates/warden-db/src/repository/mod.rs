//! SurrealDB repository implementations.

mod permission;
mod role;

pub use permission::SurrealPermissionRepository;
pub use role::SurrealRoleRepository;
