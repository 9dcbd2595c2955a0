//! Test driver: check yielded effects against a fixture, never trigger them
//!
//! A [`Fixture`] lists one step per expected yield. Each step may name the
//! effect the coroutine should yield there and the value to resume it with.
//! No effect is ever triggered, so a workflow's whole control flow (failure
//! branches included) can be covered without touching disk or network.
//!
//! ```
//! use effectio::driver::Fixture;
//! use effectio::effects::{Effect, Resolution};
//! use effectio::env::AppEnv;
//! use effectio::workflow::FileSaver;
//! use url::Url;
//!
//! let saver = FileSaver::from_env(&AppEnv::mock(), Url::parse("https://google.com").unwrap());
//!
//! let result = Fixture::new()
//!     .expect(Effect::write("Saving file moo"))
//!     .expect(Effect::request(saver.upload_request(vec![0u8])))
//!     .send(Resolution::response(200))
//!     .expect(Effect::write("Successfully saved file moo"))
//!     .run(saver.save_file("moo", vec![0u8]));
//!
//! assert_eq!(result, Ok(Ok(())));
//! ```

use crate::effects::{Effect, Resolution};
use crate::workflow::{Coroutine, Step};
use std::fmt::{Debug, Display};
use thiserror::Error;
use tracing::trace;

/// Why a coroutine did not follow its fixture
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("effect {index} mismatch: yielded {actual}, expected {expected}")]
    EffectMismatch {
        index: usize,
        actual: String,
        expected: String,
    },

    #[error("effect {index} was not expected: yielded {actual} after the fixture ran out")]
    UnexpectedEffect { index: usize, actual: String },

    #[error("workflow completed after {index} effects with {remaining} fixture steps left")]
    UnconsumedFixture { index: usize, remaining: usize },

    #[error("workflow failed after {index} effects: {error}")]
    UnexpectedFailure { index: usize, error: String },

    #[error("workflow succeeded after {index} effects but a failure was expected")]
    UnexpectedSuccess { index: usize },
}

/// One yield point of a [`Fixture`]
#[derive(Debug, Default)]
pub struct FixtureStep {
    /// Effect the coroutine must yield here, if checked
    pub expect: Option<Effect>,
    /// Value to resume the coroutine with, `None` for no value
    pub send: Option<Resolution>,
}

/// Ordered expectations and resume values for driving a coroutine in a test
#[derive(Debug, Default)]
pub struct Fixture {
    steps: Vec<FixtureStep>,
    expect_failure: bool,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw step
    pub fn step(mut self, expect: Option<Effect>, send: Option<Resolution>) -> Self {
        self.steps.push(FixtureStep { expect, send });
        self
    }

    /// Append a step expecting `effect`, resumed with no value
    pub fn expect(self, effect: impl Into<Effect>) -> Self {
        self.step(Some(effect.into()), None)
    }

    /// Set the resume value of the last step, or append an unchecked step
    /// carrying it when the last step already has one
    pub fn send(mut self, resolution: Resolution) -> Self {
        if let Some(step) = self.steps.last_mut().filter(|step| step.send.is_none()) {
            step.send = Some(resolution);
            return self;
        }
        self.step(None, Some(resolution))
    }

    /// Append an unchecked step resumed with no value
    pub fn skip(self) -> Self {
        self.step(None, None)
    }

    /// The coroutine is expected to complete with an error
    pub fn expect_failure(mut self) -> Self {
        self.expect_failure = true;
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drive `coroutine` through the fixture
    ///
    /// Returns the coroutine's own result when it followed the fixture, or the
    /// first deviation as a [`HarnessError`].
    pub fn run<C>(self, mut coroutine: C) -> Result<Result<C::Output, C::Error>, HarnessError>
    where
        C: Coroutine,
        C::Error: Display,
    {
        let mut steps = self.steps.into_iter();
        let mut input = None;
        let mut index = 0;

        loop {
            match coroutine.resume(input.take()) {
                Step::Yield(effect) => {
                    let Some(step) = steps.next() else {
                        return Err(HarnessError::UnexpectedEffect {
                            index,
                            actual: effect.to_string(),
                        });
                    };
                    if let Some(expected) = &step.expect {
                        if effect != *expected {
                            return Err(HarnessError::EffectMismatch {
                                index,
                                actual: effect.to_string(),
                                expected: expected.to_string(),
                            });
                        }
                    }
                    trace!("Effect {} matched fixture: {}", index, effect);
                    input = step.send;
                    index += 1;
                }
                Step::Complete(result) => {
                    let remaining = steps.len();
                    return match (result, self.expect_failure) {
                        (Err(error), true) => Ok(Err(error)),
                        (Err(error), false) => Err(HarnessError::UnexpectedFailure {
                            index,
                            error: error.to_string(),
                        }),
                        (Ok(_), true) => Err(HarnessError::UnexpectedSuccess { index }),
                        (Ok(_), false) if remaining > 0 => {
                            Err(HarnessError::UnconsumedFixture { index, remaining })
                        }
                        (Ok(output), false) => Ok(Ok(output)),
                    };
                }
            }
        }
    }

    /// Like [`run`](Self::run), panicking with the diagnostic on deviation
    pub fn assert<C>(self, coroutine: C) -> Result<C::Output, C::Error>
    where
        C: Coroutine,
        C::Error: Display,
    {
        self.run(coroutine)
            .unwrap_or_else(|error| panic!("Fixture assertion failed: {error}"))
    }
}

/// Unwrap a harness result that is expected to have succeeded
pub fn assert_completed<T: Debug, E: Debug>(result: Result<Result<T, E>, HarnessError>) -> T {
    match result {
        Ok(Ok(output)) => output,
        Ok(Err(error)) => panic!("Expected success, workflow failed: {error:?}"),
        Err(error) => panic!("Fixture assertion failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::AppEnv;
    use crate::workflow::{FileSaver, SaveError};
    use url::Url;

    fn saver() -> FileSaver {
        FileSaver::from_env(&AppEnv::mock(), Url::parse("https://google.com").unwrap())
    }

    #[test]
    fn test_send_fills_last_step() {
        let fixture = Fixture::new()
            .expect(Effect::write("a"))
            .send(Resolution::Written)
            .send(Resolution::response(200));

        assert_eq!(fixture.len(), 2);
        assert!(fixture.steps[0].expect.is_some());
        assert_eq!(fixture.steps[0].send, Some(Resolution::Written));
        assert!(fixture.steps[1].expect.is_none());
        assert_eq!(fixture.steps[1].send, Some(Resolution::response(200)));
    }

    #[test]
    fn test_unchecked_steps_only_supply_values() {
        let result = Fixture::new()
            .skip()
            .send(Resolution::response(200))
            .skip()
            .run(saver().save_file("moo", vec![0u8]));

        // The response lands on the log step, so the request step is resumed empty
        assert_eq!(
            result,
            Err(HarnessError::UnexpectedFailure {
                index: 2,
                error: "No HTTP response was supplied while saving file moo".to_string(),
            })
        );
    }

    #[test]
    fn test_mismatch_names_index_and_both_effects() {
        let error = Fixture::new()
            .expect(Effect::write("Saving file moo"))
            .expect(Effect::write("Saving file cow"))
            .run(saver().save_file("moo", vec![0u8]))
            .unwrap_err();

        assert_eq!(
            error,
            HarnessError::EffectMismatch {
                index: 1,
                actual: "request POST https://google.com/ (1 byte body)".to_string(),
                expected: "write \"Saving file cow\"".to_string(),
            }
        );
        assert!(error.to_string().starts_with("effect 1 mismatch"));
    }

    #[test]
    #[should_panic(expected = "Fixture assertion failed: effect 0 mismatch")]
    fn test_assert_panics_with_diagnostic() {
        let _ = Fixture::new()
            .expect(Effect::write("Loading file moo"))
            .assert(saver().save_file("moo", vec![0u8]));
    }

    #[test]
    fn test_assert_completed_returns_output() {
        let result: Result<Result<u8, SaveError>, HarnessError> = Ok(Ok(7));
        assert_eq!(assert_completed(result), 7);
    }
}
