//! Effect describing "send this HTTP request via this client"

use super::deferred::Deferred;
use super::error::{MissingResourceError, Resource};
use super::resolution::{Outcome, Resolution};
use crate::env::{HttpClient, HttpRequest};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A deferred HTTP request
///
/// Two request effects are equal when their requests are, whichever client
/// (if any) they are bound to.
pub struct RequestEffect {
    client: Option<Arc<dyn HttpClient>>,
    request: HttpRequest,
    deferred: Deferred,
}

impl RequestEffect {
    pub fn new(client: Option<Arc<dyn HttpClient>>, request: HttpRequest) -> Self {
        Self {
            client,
            request,
            deferred: Deferred::new(),
        }
    }

    pub fn bound(client: Arc<dyn HttpClient>, request: HttpRequest) -> Self {
        Self::new(Some(client), request)
    }

    pub fn described(request: HttpRequest) -> Self {
        Self::new(None, request)
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn is_bound(&self) -> bool {
        self.client.is_some()
    }

    pub fn is_triggered(&self) -> bool {
        self.deferred.is_resolved()
    }

    /// Send the request, the first time only
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
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| MissingResourceError::new(Resource::HttpClient, self))?;
        let response = client.send(&self.request).await?;
        debug!("Request {} resolved with status {}", self.request, response.status());
        Ok(Resolution::Response(response))
    }
}

impl PartialEq for RequestEffect {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request
    }
}

impl Eq for RequestEffect {}

impl fmt::Display for RequestEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request {}", self.request)
    }
}

impl fmt::Debug for RequestEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestEffect")
            .field("request", &self.request)
            .field("bound", &self.is_bound())
            .field("triggered", &self.is_triggered())
            .finish()
    }
}
