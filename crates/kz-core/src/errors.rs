//! Cross-cutting error types for Kambaz.
//!
//! Transport errors live in `kz-client`, configuration errors in `kz-config`.
//! Everything converges on `anyhow` in `kz-cli`.

use thiserror::Error;

/// Errors that can be raised by the domain layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        to: String,
    },

    /// Data failed validation (authoring constraints, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The current user's role does not permit the action.
    #[error("{action} is only available to {required} users")]
    Forbidden { action: String, required: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
