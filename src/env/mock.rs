//! Mock resource implementations for testing
//!
//! These keep everything in memory and record every call, so tests can check
//! how often a resource was actually used.

use super::http::{HttpError, HttpRequest, HttpResponse};
use super::traits::{HttpClient, LogSink};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock log sink that records messages
///
/// # Examples
///
/// ```
/// use effectio::env::{LogSink, MockLogSink};
///
/// # tokio_test::block_on(async {
/// let sink = MockLogSink::failing();
/// assert!(sink.write("lost").await.is_err());
/// assert_eq!(sink.write_count(), 1);
/// assert!(sink.messages().is_empty());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockLogSink {
    messages: Arc<Mutex<Vec<String>>>,
    attempts: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails with a broken pipe error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Messages successfully written so far
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }

    /// Number of write attempts, failed ones included
    pub fn write_count(&self) -> usize {
        *lock(&self.attempts)
    }
}

#[async_trait]
impl LogSink for MockLogSink {
    async fn write(&self, message: &str) -> std::io::Result<()> {
        *lock(&self.attempts) += 1;
        if self.fail {
            return Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock sink rejected the write",
            ));
        }
        lock(&self.messages).push(message.to_string());
        Ok(())
    }
}

/// Mock HTTP client that answers every request with a fixed status
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    status: u16,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpClient {
    /// A client answering `200 OK`
    pub fn new() -> Self {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn send_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        lock(&self.requests).push(request.clone());
        Ok(HttpResponse::new(self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[tokio::test]
    async fn test_mock_sink_records_messages() {
        let sink = MockLogSink::new();
        sink.write("one").await.unwrap();
        sink.write("two").await.unwrap();

        assert_eq!(sink.messages(), vec!["one", "two"]);
        assert_eq!(sink.write_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_sink_clones_share_state() {
        let sink = MockLogSink::new();
        let clone = sink.clone();
        clone.write("shared").await.unwrap();

        assert_eq!(sink.messages(), vec!["shared"]);
    }

    #[tokio::test]
    async fn test_mock_client_returns_configured_status() {
        let client = MockHttpClient::with_status(503);
        let request = HttpRequest::post(Url::parse("https://example.com").unwrap(), vec![7u8]);

        let response = client.send(&request).await.unwrap();

        assert_eq!(response.status(), 503);
        assert_eq!(client.requests(), vec![request]);
        assert_eq!(client.send_count(), 1);
    }
}
