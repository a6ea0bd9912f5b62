//! WARDEN Authz — grant management, permission lookups, and the
//! [`PermissionChecker`] evaluation engine.
//!
//! Generic over the `warden-core` repository traits so that the
//! authorization layer has no dependency on the database crate.

pub mod actions;
pub mod checker;
pub mod grants;
pub mod lookup;

pub use checker::{CheckSpec, PermissionChecker};
pub use grants::GrantService;
