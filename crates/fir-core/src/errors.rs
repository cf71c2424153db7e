//! Cross-cutting error types for FIR Desk.
//!
//! Transport and API errors live in `fir-client`; configuration errors live in
//! `fir-config`. The CLI converges all of them into `anyhow::Error`.

use thiserror::Error;

/// Errors raised by the pure client-side procedures in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Walking `parent_id` links revisited a folder. The folder data is malformed.
    #[error("Folder hierarchy contains a cycle through folder {id}")]
    FolderCycle { id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
