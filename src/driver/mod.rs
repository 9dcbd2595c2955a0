//! Drivers iterate a [`Coroutine`](crate::workflow::Coroutine) to completion
//!
//! - [`Runtime`] triggers every yielded effect and resumes with its outcome
//! - [`Fixture`] compares every yielded effect with an expectation and resumes
//!   with a synthetic value, triggering nothing

mod harness;
mod runtime;

pub use harness::{assert_completed, Fixture, FixtureStep, HarnessError};
pub use runtime::Runtime;

use crate::effects::EffectError;
use thiserror::Error;

/// Failure of a production drive
#[derive(Debug, Error)]
pub enum DriveError<E> {
    /// A yielded effect failed when triggered
    #[error("effect {index} ({effect}) failed: {source}")]
    Effect {
        index: usize,
        effect: String,
        #[source]
        source: EffectError,
    },

    /// The workflow itself completed with an error
    #[error("workflow failed: {0}")]
    Workflow(#[source] E),
}
