//! Multi-outcome aggregation.

use crate::Outcome;

/// Collects every success payload in input order, or returns the first
/// `Failure` encountered.
///
/// Iteration stops at that first failure: later elements of a lazy iterator
/// are never pulled. Nothing is reserved up front from the iterator's size
/// hint, so an unbounded lazy source is fine.
///
/// ```
/// use pandora_core::{all, Outcome};
///
/// let ok: Outcome<Vec<i32>, &str> = all([Outcome::Success(1), Outcome::Success(2)]);
/// assert_eq!(ok, Outcome::Success(vec![1, 2]));
///
/// let first = all([Outcome::Success(1), Outcome::Failure("x"), Outcome::Failure("y")]);
/// assert_eq!(first, Outcome::Failure("x"));
/// ```
pub fn all<V, E, I>(outcomes: I) -> Outcome<Vec<V>, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    let mut values = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }

    Outcome::Success(values)
}

/// `.collect()` into `Outcome<Vec<V>, E>` with the same semantics as [`all`].
impl<V, E> FromIterator<Outcome<V, E>> for Outcome<Vec<V>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        all(iter)
    }
}
