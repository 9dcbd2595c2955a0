//! Lazy, comparable descriptions of side effects
//!
//! A workflow never performs I/O itself. It yields an [`Effect`] describing
//! what should happen, and whoever drives the workflow decides whether to
//! [`trigger`](Effect::trigger) it or to answer with a made-up [`Resolution`].
//!
//! Every effect:
//! - is cheap to build and does nothing until triggered
//! - runs its action at most once, later triggers reuse the outcome
//! - compares equal to another effect with the same description, bound
//!   resource or not
//!
//! ```
//! use effectio::effects::{Effect, WriteEffect};
//! use effectio::env::MockLogSink;
//! use std::sync::Arc;
//!
//! let sink = MockLogSink::new();
//! let yielded = Effect::from(WriteEffect::bound(Arc::new(sink.clone()), "Saving file moo"));
//!
//! // Nothing was written, yet the effect can be checked against an expectation
//! assert_eq!(sink.write_count(), 0);
//! assert_eq!(yielded, Effect::write("Saving file moo"));
//! ```

mod deferred;
mod error;
mod request;
mod resolution;
mod write;

pub use error::{EffectError, MissingResourceError, Resource};
pub use request::RequestEffect;
pub use resolution::{Outcome, Resolution};
pub use write::WriteEffect;

use crate::env::HttpRequest;
use std::fmt;

/// Any effect a workflow can yield
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    Write(WriteEffect),
    Request(RequestEffect),
}

/// What an effect would do, independent of any bound resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Description<'a> {
    Write(&'a str),
    Request(&'a HttpRequest),
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(message) => write!(f, "write {message:?}"),
            Self::Request(request) => write!(f, "request {request}"),
        }
    }
}

impl Effect {
    /// Unbound write effect, for expectations
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(WriteEffect::described(message))
    }

    /// Unbound request effect, for expectations
    pub fn request(request: HttpRequest) -> Self {
        Self::Request(RequestEffect::described(request))
    }

    pub fn description(&self) -> Description<'_> {
        match self {
            Self::Write(effect) => Description::Write(effect.message()),
            Self::Request(effect) => Description::Request(effect.request()),
        }
    }

    pub async fn trigger(&self) -> Outcome {
        match self {
            Self::Write(effect) => effect.trigger().await,
            Self::Request(effect) => effect.trigger().await,
        }
    }

    pub fn on_complete<F>(&self, callback: F)
    where
        F: FnOnce(&Outcome) + Send + 'static,
    {
        match self {
            Self::Write(effect) => effect.on_complete(callback),
            Self::Request(effect) => effect.on_complete(callback),
        }
    }

    pub fn is_bound(&self) -> bool {
        match self {
            Self::Write(effect) => effect.is_bound(),
            Self::Request(effect) => effect.is_bound(),
        }
    }

    pub fn is_triggered(&self) -> bool {
        match self {
            Self::Write(effect) => effect.is_triggered(),
            Self::Request(effect) => effect.is_triggered(),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.description(), f)
    }
}

impl From<WriteEffect> for Effect {
    fn from(effect: WriteEffect) -> Self {
        Self::Write(effect)
    }
}

impl From<RequestEffect> for Effect {
    fn from(effect: RequestEffect) -> Self {
        Self::Request(effect)
    }
}
