//! Effect sinks that receive folded outcomes.

use async_trait::async_trait;

/// Receives each outcome of a stream, one branch per emission.
///
/// Implementations own the user-visible side effect (notify, navigate,
/// persist...). The reactive loop guarantees exactly one call per outcome.
#[async_trait]
pub trait Effect<V, E>: Send + Sync {
    async fn on_success(&self, value: V);
    async fn on_failure(&self, error: E);
}

/// Effect built from two synchronous closures.
pub struct FnEffect<S, F> {
    on_success: S,
    on_failure: F,
}

impl<S, F> FnEffect<S, F> {
    pub fn new(on_success: S, on_failure: F) -> Self {
        Self {
            on_success,
            on_failure,
        }
    }
}

#[async_trait]
impl<V, E, S, F> Effect<V, E> for FnEffect<S, F>
where
    V: Send + 'static,
    E: Send + 'static,
    S: Fn(V) + Send + Sync,
    F: Fn(E) + Send + Sync,
{
    async fn on_success(&self, value: V) {
        (self.on_success)(value)
    }

    async fn on_failure(&self, error: E) {
        (self.on_failure)(error)
    }
}
