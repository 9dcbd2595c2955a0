//! Real resource implementations that perform actual I/O
//!
//! These are used by the production driver. Tests reach for the mocks instead.

use super::http::{HttpError, HttpRequest, HttpResponse};
use super::traits::{HttpClient, LogSink};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, trace};

/// Log sink backed by a file opened in append mode
///
/// Every message is written on its own line and flushed immediately.
#[derive(Debug)]
pub struct FileLogSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileLogSink {
    /// Open (creating if needed) the file at `path` for appending
    pub async fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        debug!("Opened log sink at {}", path.display());

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogSink for FileLogSink {
    async fn write(&self, message: &str) -> std::io::Result<()> {
        let mut file = self.file.lock().await;
        file.write_all(message.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        trace!("Appended {} bytes to {}", message.len() + 1, self.path.display());
        Ok(())
    }
}

/// HTTP client backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        debug!("Sending {}", request);

        let response = self
            .client
            .request(request.method().clone(), request.url().clone())
            .body(request.body().to_vec())
            .send()
            .await
            .map_err(|e| HttpError::new(request.url(), e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(request.url(), e))?;

        debug!("{} {} answered with status {}", request.method(), request.url(), status);
        Ok(HttpResponse::new(status).with_body(body.to_vec()))
    }
}
