//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RosterError`]
//! via `From`.

use std::error::Error as StdError;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// An id-addressed operation matched no record.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The record store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// A lookup by id matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Employee"`).
    pub entity: &'static str,
    /// Identifier that matched nothing.
    pub id: String,
}
