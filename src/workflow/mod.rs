//! Workflows as explicit suspend/resume state machines
//!
//! A workflow is a [`Coroutine`]: each [`resume`](Coroutine::resume) either
//! suspends it on a yielded [`Effect`] or completes it with a result. The value
//! passed to the next `resume` is whatever the driver decided the yielded
//! effect resolved to. Workflows do no work between yields, so the sequence of
//! effects depends only on the sequence of resume values.

mod save_file;

pub use save_file::{FileSaver, SaveError, SaveFile};

use crate::effects::{Effect, Resolution};

/// What a coroutine did with the last resume
#[derive(Debug)]
pub enum Step<T, E> {
    /// Suspended, waiting for the outcome of this effect
    Yield(Effect),
    /// Finished; no further resumes are meaningful
    Complete(Result<T, E>),
}

impl<T, E> Step<T, E> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// A resumable workflow yielding effects
///
/// The first `resume` starts the workflow and its input is ignored. Each later
/// input answers the effect yielded just before it; `None` means "no value".
pub trait Coroutine {
    type Output;
    type Error;

    fn resume(&mut self, input: Option<Resolution>) -> Step<Self::Output, Self::Error>;
}

impl<C: Coroutine + ?Sized> Coroutine for Box<C> {
    type Output = C::Output;
    type Error = C::Error;

    fn resume(&mut self, input: Option<Resolution>) -> Step<Self::Output, Self::Error> {
        (**self).resume(input)
    }
}
