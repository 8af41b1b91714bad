//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BarberHubError`] via `#[from]`. Validation and storage failures stay
//! distinct so the HTTP layer can map them to different status codes.

/// Top-level error for all use-cases.
#[derive(Debug, thiserror::Error)]
pub enum BarberHubError {
    /// A domain invariant or input constraint was violated.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The storage collaborator failed; carries the underlying message.
    #[error("{0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A barbershop name must not be empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The list limit must stay within `[1, 100]`.
    #[error("limit must be between 1 and 100")]
    LimitOutOfRange,
}
