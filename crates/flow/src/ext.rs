//! Async combinators complementing [`Outcome::and_then_async`].

use pandora_core::Outcome;
use std::future::Future;

/// Extension trait adding awaitable forms of `map` and `and_then_error`.
///
/// Each transform is called and awaited at most once, only on the matching
/// variant. Nothing is spawned; the caller's task does the awaiting.
pub trait AsyncOutcomeExt<V, E>: Sized {
    fn map_async<V2, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<V2, E>>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = V2>;

    fn and_then_error_async<E2, F, Fut>(
        self,
        transform: F,
    ) -> impl Future<Output = Outcome<V, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<V, E2>>;
}

impl<V, E> AsyncOutcomeExt<V, E> for Outcome<V, E> {
    fn map_async<V2, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<V2, E>>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = V2>,
    {
        async move {
            match self {
                Outcome::Success(value) => Outcome::Success(transform(value).await),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    fn and_then_error_async<E2, F, Fut>(
        self,
        transform: F,
    ) -> impl Future<Output = Outcome<V, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<V, E2>>,
    {
        async move {
            match self {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => transform(error).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn map_async_skips_failure() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;

        let ok = Outcome::<u32, String>::Success(2)
            .map_async(|v| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                v * 5
            })
            .await;
        assert_eq!(ok, Outcome::Success(10));

        let failed = Outcome::<u32, String>::Failure("no".into())
            .map_async(|v| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                v * 5
            })
            .await;
        assert_eq!(failed, Outcome::Failure("no".into()));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn and_then_error_async_recovers() {
        let recovered: Outcome<u32, ()> = Outcome::<u32, String>::Failure("retry".into())
            .and_then_error_async(|e| async move { Outcome::Success(e.len() as u32) })
            .await;
        assert_eq!(recovered, Outcome::Success(5));

        let untouched: Outcome<u32, ()> = Outcome::<u32, String>::Success(1)
            .and_then_error_async(|_| async { Outcome::Failure(()) })
            .await;
        assert_eq!(untouched, Outcome::Success(1));
    }
}
