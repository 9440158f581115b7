//! Async helpers over [`Outcome`](pandora_core::Outcome) and the reactive
//! consumer that folds a stream of outcomes into effects.

pub mod effect;
pub mod ext;
pub mod react;

pub use effect::{Effect, FnEffect};
pub use ext::AsyncOutcomeExt;
pub use react::{launch, launch_on, react, ReactStats};
