//! Error types for interface synthesis.

use thiserror::Error;

use crate::syntax::TypeRef;

/// Errors that can occur while synthesizing one interface.
///
/// Every variant is scoped to a single class: the batch driver turns them
/// into diagnostics and carries on with the remaining classes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A class reached synthesis without the class-level marker.
    #[error("class '{class}' is not annotated with [{marker}]")]
    MissingMarker { class: String, marker: String },

    /// Filtering, transforming or assembling a class failed.
    #[error("failed to synthesize interface for '{class}': {reason}")]
    SynthesisFailure { class: String, reason: String },

    /// A base-type reference has no symbol; it is left out of inheritance
    /// resolution.
    #[error("unresolved type reference '{reference}' in '{class}'")]
    UnresolvedTypeReference { class: String, reference: TypeRef },

    /// Host hand-off data could not be read or contradicts itself.
    #[error("interchange error: {0}")]
    Interchange(String),
}

impl GenerateError {
    /// Create a missing marker error.
    pub fn missing_marker(class: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::MissingMarker {
            class: class.into(),
            marker: marker.into(),
        }
    }

    /// Create a synthesis failure.
    pub fn synthesis(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SynthesisFailure {
            class: class.into(),
            reason: reason.into(),
        }
    }

    /// Create an unresolved reference error.
    pub fn unresolved(class: impl Into<String>, reference: TypeRef) -> Self {
        Self::UnresolvedTypeReference {
            class: class.into(),
            reference,
        }
    }

    /// Create an interchange error from any displayable cause.
    pub fn interchange(cause: impl std::fmt::Display) -> Self {
        Self::Interchange(cause.to_string())
    }

    /// Whether the error cost the class its artifact.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::UnresolvedTypeReference { .. })
    }
}
