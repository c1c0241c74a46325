//! Structured domain errors raised by store collaborators.
//!
//! A [`DomainError`] carries a classification tag and a human-readable
//! message. Stores construct them; the API layer translates them into HTTP
//! status codes. They are distinct from raw transport or I/O errors, which
//! carry no classification and always translate to 500.

use std::fmt;

/// Classification tag for a [`DomainError`].
///
/// The set is closed: stores must pick the closest tag and put any nuance
/// into the message. `Unspecified` is the catch-all for failures that have
/// no caller-actionable classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The named resource does not exist.
    NotFound,
    /// The request payload or identifier is malformed or rejected.
    InvalidArgument,
    /// The store is out of capacity.
    NoSpace,
    /// The caller is not allowed to perform the operation.
    NotAuthorized,
    /// Any failure without a more specific classification.
    Unspecified,
}

impl ErrorKind {
    /// Short lowercase label used in log records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidArgument => "invalid_argument",
            Self::NoSpace => "no_space",
            Self::NotAuthorized => "not_authorized",
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by a store collaborator.
///
/// Immutable once constructed. Consumed exactly once by the API layer's
/// error translator, which selects the HTTP status from `kind` and returns
/// `message` as the response body.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct DomainError {
    /// Classification tag driving status-code selection.
    pub kind: ErrorKind,
    /// Human-readable description, returned verbatim to the caller.
    pub message: String,
}

impl DomainError {
    /// Creates a domain error with the given classification and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a `NotFound` error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Shorthand for a `NoSpace` error.
    pub fn no_space(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoSpace, message)
    }

    /// Shorthand for a `NotAuthorized` error.
    pub fn not_authorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthorized, message)
    }
}
