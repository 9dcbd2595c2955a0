//! Capability traits for the resources an effect can be bound to
//!
//! Effects never own these resources. The driver side creates them once and
//! lends them to effects behind an `Arc`, so a workflow can be exercised with
//! real or mock implementations without changing its code.

use super::http::{HttpError, HttpRequest, HttpResponse};
use async_trait::async_trait;

/// A destination for log messages
///
/// # Examples
///
/// ```
/// use effectio::env::{LogSink, MockLogSink};
///
/// # tokio_test::block_on(async {
/// let sink = MockLogSink::new();
/// sink.write("hello").await.unwrap();
/// assert_eq!(sink.messages(), vec!["hello".to_string()]);
/// # });
/// ```
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Append a single message
    async fn write(&self, message: &str) -> std::io::Result<()>;
}

/// Something that can send an [`HttpRequest`] and return its response
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError>;
}
