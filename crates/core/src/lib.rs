//! The `Outcome` result type, its combinators, and error definitions.
//!
//! Foundation crate -- no async runtime or I/O dependencies.

pub mod aggregate;
pub mod capture;
pub mod error;
pub mod outcome;

pub use aggregate::all;
pub use capture::wrap_exception;
pub use error::{BoxError, PandoraError, PandoraResult, UnwrapFailure};
pub use outcome::Outcome;
