//! Combined application environment
//!
//! Bundles the log sink and HTTP client a workflow is constructed with.

use super::mock::{MockHttpClient, MockLogSink};
use super::real::{FileLogSink, ReqwestClient};
use super::traits::{HttpClient, LogSink};
use std::path::PathBuf;
use std::sync::Arc;

/// The resources a driver lends to the effects it triggers
///
/// # Examples
///
/// ```
/// use effectio::env::AppEnv;
///
/// // Mock environment for tests: nothing touches disk or network
/// let env = AppEnv::mock();
/// ```
#[derive(Clone)]
pub struct AppEnv {
    pub sink: Arc<dyn LogSink>,
    pub http: Arc<dyn HttpClient>,
}

impl AppEnv {
    /// Real environment appending to `log_path` and sending over `reqwest`
    pub async fn real(log_path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let sink = FileLogSink::open(log_path).await?;
        Ok(Self {
            sink: Arc::new(sink),
            http: Arc::new(ReqwestClient::new()),
        })
    }

    /// Environment with in-memory mocks
    pub fn mock() -> Self {
        Self {
            sink: Arc::new(MockLogSink::new()),
            http: Arc::new(MockHttpClient::new()),
        }
    }

    pub fn custom(sink: Arc<dyn LogSink>, http: Arc<dyn HttpClient>) -> Self {
        Self { sink, http }
    }
}

impl std::fmt::Debug for AppEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnv")
            .field("sink", &"dyn LogSink")
            .field("http", &"dyn HttpClient")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_mock_env_writes_stay_in_memory() {
        let sink = MockLogSink::new();
        let env = AppEnv::custom(Arc::new(sink.clone()), Arc::new(MockHttpClient::new()));

        env.sink.write("in memory").await.unwrap();

        assert_eq!(sink.messages(), vec!["in memory"]);
    }

    #[tokio::test]
    async fn test_real_env_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");

        let env = AppEnv::real(&path).await.unwrap();
        env.sink.write("on disk").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "on disk\n");
    }

    #[test]
    fn test_debug_hides_resources() {
        let env = AppEnv::mock();
        let debug = format!("{env:?}");
        assert!(debug.contains("dyn LogSink"));
        assert!(debug.contains("dyn HttpClient"));
    }
}
