//! Bridge from `Result`-returning code into the Outcome channel.

use crate::Outcome;

/// Runs `computation` and captures its error into a `Failure`.
///
/// When `fallback_error` is `Some`, it replaces whatever error the
/// computation returned. Panics are not caught and keep unwinding.
///
/// ```
/// use pandora_core::{wrap_exception, BoxError, Outcome};
///
/// let parsed: Outcome<i32, BoxError> = wrap_exception(None, || Ok("42".parse::<i32>()?));
/// assert_eq!(parsed.get_or_else(0), 42);
/// ```
pub fn wrap_exception<V, E, F>(fallback_error: Option<E>, computation: F) -> Outcome<V, E>
where
    F: FnOnce() -> Result<V, E>,
{
    match computation() {
        Ok(value) => Outcome::Success(value),
        Err(captured) => Outcome::Failure(fallback_error.unwrap_or(captured)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxError;

    #[derive(Debug, Clone, PartialEq)]
    enum Fault {
        Thrown,
        Fallback,
    }

    #[test]
    fn success_is_wrapped() {
        assert_eq!(
            wrap_exception::<_, Fault, _>(Some(Fault::Fallback), || Ok(5)),
            Outcome::Success(5)
        );
    }

    #[test]
    fn captured_error_without_fallback() {
        let out: Outcome<i32, Fault> = wrap_exception(None, || Err(Fault::Thrown));
        assert_eq!(out, Outcome::Failure(Fault::Thrown));
    }

    #[test]
    fn fallback_overrides_captured_error() {
        let out: Outcome<i32, Fault> = wrap_exception(Some(Fault::Fallback), || Err(Fault::Thrown));
        assert_eq!(out, Outcome::Failure(Fault::Fallback));
    }

    #[test]
    fn question_mark_converts_into_box_error() {
        let out: Outcome<i32, BoxError> = wrap_exception(None, || Ok("nope".parse::<i32>()?));
        let msg = out.fold(|_| String::new(), |e| e.to_string());
        assert_eq!(msg, "invalid digit found in string");
    }

    #[test]
    #[should_panic(expected = "not an error")]
    fn panics_are_not_swallowed() {
        let _: Outcome<i32, Fault> =
            wrap_exception(Some(Fault::Fallback), || panic!("not an error"));
    }
}
