//! Well-known action names.

pub const ACTION_CREATE: &str = "create";
pub const ACTION_READ: &str = "read";
pub const ACTION_READWRITE: &str = "rw";
pub const ACTION_UPDATE: &str = "update";
pub const ACTION_DELETE: &str = "delete";
/// Coarse aggregate: a single `crud` grant stands in for all four CRUD
/// actions on a resource. It is matched literally, never expanded into
/// the individual action names.
pub const ACTION_CRUD: &str = "crud";
pub const ACTION_ADMIN: &str = "admin_action";
