//! Domain models for WARDEN.
//!
//! These are the core types shared across all crates.

pub mod permission;
pub mod role;
