//! Centralized error types for the Pandora workspace.

use thiserror::Error;

/// Raised by [`Outcome::get_or_throw`](crate::Outcome::get_or_throw) when the
/// outcome is a `Failure`.
///
/// `description` is the failure rendered with the error's `Debug` form,
/// e.g. `Outcome.Failure("boom")`. This differs from the outcome's `Display`
/// (`Outcome.Failure(boom)`) and needs only `E: Debug`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot unwrap {description}")]
pub struct UnwrapFailure {
    pub description: String,
}

impl UnwrapFailure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Type-erased error captured by [`wrap_exception`](crate::wrap_exception).
///
/// Any `?` inside a wrapped closure converts into this.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error enum for consumers that leave the Outcome channel.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PandoraError {
    #[error(transparent)]
    Unwrap(#[from] UnwrapFailure),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PandoraResult<T> = Result<T, PandoraError>;
