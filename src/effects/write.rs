//! Effect describing "write this message to this log sink"

use super::deferred::Deferred;
use super::error::{MissingResourceError, Resource};
use super::resolution::{Outcome, Resolution};
use crate::env::LogSink;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A deferred log write
///
/// Equality looks at the message only, so an unbound `WriteEffect` built in a
/// test matches the bound one a workflow yields.
pub struct WriteEffect {
    sink: Option<Arc<dyn LogSink>>,
    message: String,
    deferred: Deferred,
}

impl WriteEffect {
    pub fn new(sink: Option<Arc<dyn LogSink>>, message: impl Into<String>) -> Self {
        Self {
            sink,
            message: message.into(),
            deferred: Deferred::new(),
        }
    }

    pub fn bound(sink: Arc<dyn LogSink>, message: impl Into<String>) -> Self {
        Self::new(Some(sink), message)
    }

    /// An effect with no sink, only good for comparison
    pub fn described(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_bound(&self) -> bool {
        self.sink.is_some()
    }

    pub fn is_triggered(&self) -> bool {
        self.deferred.is_resolved()
    }

    /// Write the message, the first time only
    pub async fn trigger(&self) -> Outcome {
        self.deferred.force(|| self.perform()).await
    }

    pub fn on_complete<F>(&self, callback: F)
    where
        F: FnOnce(&Outcome) + Send + 'static,
    {
        self.deferred.on_complete(Box::new(callback));
    }

    async fn perform(&self) -> Outcome {
        let sink = self
            .sink
            .as_ref()
            .ok_or_else(|| MissingResourceError::new(Resource::LogSink, self))?;
        debug!("Writing log message: {}", self.message);
        sink.write(&self.message).await?;
        Ok(Resolution::Written)
    }
}

impl PartialEq for WriteEffect {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for WriteEffect {}

impl fmt::Display for WriteEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "write {:?}", self.message)
    }
}

impl fmt::Debug for WriteEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteEffect")
            .field("message", &self.message)
            .field("bound", &self.is_bound())
            .field("triggered", &self.is_triggered())
            .finish()
    }
}
