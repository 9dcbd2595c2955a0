//! Production driver: trigger every yielded effect for real

use super::DriveError;
use crate::workflow::{Coroutine, Step};
use std::fmt::Display;
use tracing::{debug, trace, warn};

/// Runs coroutines to completion against the resources their effects are
/// bound to
///
/// Effects are triggered one at a time; the coroutine is only resumed once the
/// current effect has resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runtime;

impl Runtime {
    pub fn new() -> Self {
        Self
    }

    pub async fn run<C>(&self, mut coroutine: C) -> Result<C::Output, DriveError<C::Error>>
    where
        C: Coroutine,
        C::Error: Display,
    {
        let mut input = None;
        let mut index = 0;

        loop {
            match coroutine.resume(input.take()) {
                Step::Yield(effect) => {
                    debug!("Effect {}: triggering {}", index, effect);
                    let resolution = effect.trigger().await.map_err(|source| {
                        warn!("Effect {} ({}) failed: {}", index, effect, source);
                        DriveError::Effect {
                            index,
                            effect: effect.to_string(),
                            source,
                        }
                    })?;
                    trace!("Effect {} resolved to {:?}", index, resolution);
                    input = Some(resolution);
                    index += 1;
                }
                Step::Complete(result) => {
                    debug!("Workflow completed after {} effects", index);
                    return result.map_err(|e| {
                        warn!("Workflow failed: {}", e);
                        DriveError::Workflow(e)
                    });
                }
            }
        }
    }
}
