//! Error types for the WARDEN system.
//!
//! All three authorization outcomes are terminal: they propagate to the
//! enclosing request handler unchanged, which maps them onto protocol
//! responses (404 / 409 / 401). No variant is retried or recovered from
//! inside this layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardenError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Duplicate grant: {entity} '{name}' already exists")]
    Conflict { entity: String, name: String },

    #[error("Not authorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Database error: {0}")]
    Database(String),
}

pub type WardenResult<T> = Result<T, WardenError>;
