//! Error types for the reference display engine.

use thiserror::Error;

use crate::engine::TokenError;

/// An error that escaped a render pass.
///
/// Drift in settings, unknown namespaces, missing records and denied access
/// are all recovered inside the engine; only collaborator failures surface.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The substitution service rejected a pattern.
    #[error("placeholder substitution failed for '{pattern}': {source}")]
    Substitution {
        pattern: String,
        #[source]
        source: TokenError,
    },
}
