//! Error types for query construction.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a query expression.
///
/// Every variant is raised at construction time. A finished [`Expr`](crate::Expr)
/// is always well formed, so there is no error for malformed trees.
#[derive(Debug, Error)]
pub enum Error {
    /// A host value cannot be represented in the requested literal category.
    #[error("Invalid {kind} literal: {reason}")]
    InvalidLiteral { kind: &'static str, reason: String },

    /// A single-use builder was used again after it was finalized.
    #[error("Builder misuse: {0}")]
    BuilderMisuse(&'static str),

    /// Rendering the wire document failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_literal(kind: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidLiteral {
            kind,
            reason: reason.into(),
        }
    }
}
