//! The "save a file" workflow
//!
//! Logs the attempt, uploads the payload, then logs the result:
//!
//! | State | Yields | Resumed with | Next |
//! |---|---|---|---|
//! | `Start` | write `Saving file <path>` | ignored | `Logged` |
//! | `Logged` | request `POST <endpoint>` with the payload | response | `Requested` |
//! | `Requested` | write `Successfully saved file <path>` on 200 | ignored | `Finishing(Ok)` |
//! | `Requested` | write `Failed to save file <path>` otherwise | ignored | `Finishing(Err)` |
//! | `Finishing` | nothing, completes | | `Done` |
//!
//! The failure log is yielded before the failure is reported, so a driver sees
//! every intended action.

use super::{Coroutine, Step};
use crate::effects::{Effect, RequestEffect, Resolution, WriteEffect};
use crate::env::{AppEnv, HttpClient, HttpRequest, HttpResponse, LogSink};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Failed to save file {path} (status {status})")]
    Rejected { path: String, status: u16 },

    #[error("No HTTP response was supplied while saving file {path}")]
    MissingResponse { path: String },

    #[error("Saving file {path} already finished")]
    Finished { path: String },
}

impl SaveError {
    pub fn path(&self) -> &str {
        match self {
            Self::Rejected { path, .. }
            | Self::MissingResponse { path }
            | Self::Finished { path } => path,
        }
    }
}

/// Builds [`SaveFile`] workflows bound to a log sink and an HTTP client
#[derive(Clone)]
pub struct FileSaver {
    sink: Arc<dyn LogSink>,
    http: Arc<dyn HttpClient>,
    endpoint: Url,
}

impl FileSaver {
    pub fn new(sink: Arc<dyn LogSink>, http: Arc<dyn HttpClient>, endpoint: Url) -> Self {
        Self {
            sink,
            http,
            endpoint,
        }
    }

    pub fn from_env(env: &AppEnv, endpoint: Url) -> Self {
        Self::new(env.sink.clone(), env.http.clone(), endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The upload request `save_file` will yield for `payload`
    pub fn upload_request(&self, payload: impl Into<Vec<u8>>) -> HttpRequest {
        HttpRequest::post(self.endpoint.clone(), payload)
    }

    /// Start a save of `payload` under `path`; nothing happens until resumed
    pub fn save_file(&self, path: impl Into<String>, payload: impl Into<Vec<u8>>) -> SaveFile {
        SaveFile {
            saver: self.clone(),
            path: path.into(),
            payload: payload.into(),
            state: State::Start,
        }
    }
}

impl fmt::Debug for FileSaver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSaver")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
enum State {
    Start,
    Logged,
    Requested,
    Finishing(Result<(), SaveError>),
    Done,
}

/// A running save; drive it with a [`Runtime`](crate::driver::Runtime) or a
/// [`Fixture`](crate::driver::Fixture)
#[derive(Debug)]
pub struct SaveFile {
    saver: FileSaver,
    path: String,
    payload: Vec<u8>,
    state: State,
}

impl SaveFile {
    pub fn path(&self) -> &str {
        &self.path
    }

    fn log(&self, message: String) -> Step<(), SaveError> {
        Step::Yield(WriteEffect::bound(self.saver.sink.clone(), message).into())
    }

    fn upload(&mut self) -> Step<(), SaveError> {
        let request = self.saver.upload_request(std::mem::take(&mut self.payload));
        Step::Yield(Effect::from(RequestEffect::bound(
            self.saver.http.clone(),
            request,
        )))
    }

    fn conclude(&mut self, response: &HttpResponse) -> Step<(), SaveError> {
        if response.is_ok() {
            self.state = State::Finishing(Ok(()));
            self.log(format!("Successfully saved file {}", self.path))
        } else {
            self.state = State::Finishing(Err(SaveError::Rejected {
                path: self.path.clone(),
                status: response.status(),
            }));
            self.log(format!("Failed to save file {}", self.path))
        }
    }
}

impl Coroutine for SaveFile {
    type Output = ();
    type Error = SaveError;

    fn resume(&mut self, input: Option<Resolution>) -> Step<(), SaveError> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Start => {
                debug!("Starting save of {}", self.path);
                self.state = State::Logged;
                self.log(format!("Saving file {}", self.path))
            }
            State::Logged => {
                self.state = State::Requested;
                self.upload()
            }
            State::Requested => match input.as_ref().and_then(Resolution::as_response) {
                Some(response) => self.conclude(response),
                None => {
                    warn!("Save of {} resumed without an HTTP response", self.path);
                    Step::Complete(Err(SaveError::MissingResponse {
                        path: self.path.clone(),
                    }))
                }
            },
            State::Finishing(result) => {
                match &result {
                    Ok(()) => info!("Saved file {}", self.path),
                    Err(e) => warn!("{}", e),
                }
                Step::Complete(result)
            }
            State::Done => Step::Complete(Err(SaveError::Finished {
                path: self.path.clone(),
            })),
        }
    }
}
