//! Reactive consumer: folds every outcome received on a channel into an
//! [`Effect`], in emission order.
//!
//! ```ignore
//! let (tx, rx) = tokio::sync::mpsc::channel(16);
//! let handle = launch(rx, Arc::new(FnEffect::new(show, report)));
//! tx.send(Outcome::Success(profile)).await?;
//! drop(tx);
//! let stats = handle.await?;
//! ```

use crate::effect::Effect;
use pandora_core::Outcome;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

/// Counts of outcomes delivered to an effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactStats {
    pub successes: usize,
    pub failures: usize,
}

impl ReactStats {
    pub fn total(&self) -> usize {
        self.successes + self.failures
    }
}

/// Drains `rx` until every sender is dropped, handing each outcome to
/// exactly one branch of `effect`.
///
/// Emissions are processed one at a time: the next outcome is not received
/// until the previous effect call has completed.
pub async fn react<V, E, X>(mut rx: Receiver<Outcome<V, E>>, effect: &X) -> ReactStats
where
    X: Effect<V, E> + ?Sized,
{
    let mut stats = ReactStats::default();

    while let Some(outcome) = rx.recv().await {
        match outcome {
            Outcome::Success(value) => {
                tracing::debug!(seq = stats.total(), "delivering success");
                effect.on_success(value).await;
                stats.successes += 1;
            }
            Outcome::Failure(error) => {
                tracing::debug!(seq = stats.total(), "delivering failure");
                effect.on_failure(error).await;
                stats.failures += 1;
            }
        }
    }

    tracing::info!(
        successes = stats.successes,
        failures = stats.failures,
        "outcome stream closed"
    );
    stats
}

/// Spawns [`react`] on the current tokio runtime.
///
/// Aborting the returned handle stops delivery; no effect runs afterwards.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn launch<V, E, X>(rx: Receiver<Outcome<V, E>>, effect: Arc<X>) -> JoinHandle<ReactStats>
where
    V: Send + 'static,
    E: Send + 'static,
    X: Effect<V, E> + ?Sized + 'static,
{
    launch_on(&Handle::current(), rx, effect)
}

/// Spawns [`react`] on an explicit runtime handle.
pub fn launch_on<V, E, X>(
    runtime: &Handle,
    rx: Receiver<Outcome<V, E>>,
    effect: Arc<X>,
) -> JoinHandle<ReactStats>
where
    V: Send + 'static,
    E: Send + 'static,
    X: Effect<V, E> + ?Sized + 'static,
{
    runtime.spawn(async move { react(rx, effect.as_ref()).await })
}
