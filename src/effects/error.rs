//! Failures an effect can report once triggered

use crate::env::HttpError;
use std::fmt;
use thiserror::Error;

/// The kind of resource an effect needs in order to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    LogSink,
    HttpClient,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogSink => f.write_str("log sink"),
            Self::HttpClient => f.write_str("HTTP client"),
        }
    }
}

/// An effect was triggered without a bound resource
///
/// Effects built only for comparison in a test carry no resource; running one
/// of those for real is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot trigger {effect}: no {resource} bound")]
pub struct MissingResourceError {
    pub resource: Resource,
    pub effect: String,
}

impl MissingResourceError {
    pub fn new(resource: Resource, effect: impl fmt::Display) -> Self {
        Self {
            resource,
            effect: effect.to_string(),
        }
    }
}

/// Outcome error of a triggered effect
///
/// Kept `Clone` so a memoised outcome can be handed to every observer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error(transparent)]
    MissingResource(#[from] MissingResourceError),

    #[error("log write failed ({kind:?}): {message}")]
    Write {
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<std::io::Error> for EffectError {
    fn from(error: std::io::Error) -> Self {
        Self::Write {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl EffectError {
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, Self::MissingResource(_))
    }
}
