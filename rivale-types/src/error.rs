use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the rivale workspace.
///
/// The taxonomy is deliberately narrow: nothing in this library performs
/// I/O, so every failure is either a lookup miss, a rejected argument, or a
/// dataset that violates its own invariants.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RivaleError {
    /// A company or financial record could not be resolved.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "company 7".
        what: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The dataset violates one of its documented invariants.
    #[error("data issue: {0}")]
    Data(String),
}

impl RivaleError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error for an invariant violation.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Returns true if this error means the comparison view is unusable and
    /// the caller should redirect to the entry surface.
    ///
    /// Only unresolvable identities qualify; everything else degrades to an
    /// empty in-page presentation.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
