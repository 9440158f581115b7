//! The two-variant [`Outcome`] type and its combinators.

use crate::error::UnwrapFailure;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Result of a fallible computation: exactly one of `Success` or `Failure`.
///
/// Combinators take `self` by value and hand back a new outcome, so an
/// instance never changes variant or payload after construction.
/// Serialized externally tagged: `{"Success": v}` / `{"Failure": e}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "an Outcome may be a Failure, which should be handled"]
pub enum Outcome<V, E> {
    Success(V),
    Failure(E),
}

// ---------------------------------------------------------------------------
// Construction & inspection
// ---------------------------------------------------------------------------

impl<V, E> Outcome<V, E> {
    pub fn success(value: V) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow both payloads without consuming the outcome.
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn success_value(self) -> Option<V> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure_value(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<V, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// ---------------------------------------------------------------------------
// Combinators
// ---------------------------------------------------------------------------

impl<V, E> Outcome<V, E> {
    /// Transforms the success payload. A `Failure` is returned untouched and
    /// `transform` is never called.
    pub fn map<V2, F>(self, transform: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(transform(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure payload. A `Success` is returned untouched.
    pub fn map_error<E2, F>(self, transform: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(transform(error)),
        }
    }

    /// Collapses the outcome into `R`. Exactly one branch runs.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Chains another fallible step on the success channel.
    ///
    /// The step's error type must already match `E`; use [`map_error`]
    /// first when composing steps with different error types.
    ///
    /// [`map_error`]: Outcome::map_error
    pub fn and_then<V2, F>(self, transform: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self {
            Outcome::Success(value) => transform(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a recovery step on the failure channel. The step may produce
    /// a `Success` or a `Failure` of a new error type.
    pub fn and_then_error<E2, F>(self, transform: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => transform(error),
        }
    }

    /// Async form of [`and_then`](Outcome::and_then).
    ///
    /// `transform` is called and awaited exactly once, only on `Success`.
    /// On `Failure` the future is never created. Dropping the returned
    /// future before it completes abandons the chain; no outcome results.
    pub async fn and_then_async<V2, F, Fut>(self, transform: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Outcome<V2, E>>,
    {
        match self {
            Outcome::Success(value) => transform(value).await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

impl<V, E> Outcome<V, E> {
    pub fn get_or_else(self, default: V) -> V {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    pub fn get_or_else_transform<F>(self, transform: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => transform(error),
        }
    }
}

impl<V, E: fmt::Debug> Outcome<V, E> {
    /// Leaves the Outcome channel: `Success` yields its payload, `Failure`
    /// becomes an [`UnwrapFailure`] describing the error.
    ///
    /// The description renders the error with `Debug`, not `Display`, so it
    /// works for any `E: Debug` and keeps string errors quoted:
    /// `Outcome.Failure("boom")` where `to_string()` gives `Outcome.Failure(boom)`.
    ///
    /// Only for call sites where success is already guaranteed.
    pub fn get_or_throw(self) -> Result<V, UnwrapFailure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(UnwrapFailure::new(format!(
                "Outcome.Failure({error:?})"
            ))),
        }
    }

    /// Panicking form of [`get_or_throw`](Outcome::get_or_throw).
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapFailure`] message if the outcome is a `Failure`.
    #[track_caller]
    pub fn unwrap(self) -> V {
        match self.get_or_throw() {
            Ok(value) => value,
            Err(failure) => panic!("{failure}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Outcome.Success({value})"),
            Outcome::Failure(error) => write!(f, "Outcome.Failure({error})"),
        }
    }
}
