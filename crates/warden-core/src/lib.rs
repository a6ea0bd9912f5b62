//! WARDEN Core — domain models, repository traits, and the shared
//! error taxonomy for the RBAC authorization layer.

pub mod error;
pub mod models;
pub mod repository;
