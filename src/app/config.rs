//! Application configuration
//!
//! Settings come from an optional TOML file; command-line flags override them.
//!
//! ```toml
//! verbose = 1
//! log_file = "log.txt"
//! endpoint = "https://google.com"
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://google.com";
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// File the log sink appends to
    pub log_file: PathBuf,
    /// Where `save_file` uploads payloads
    pub endpoint: String,
}

impl AppConfig {
    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.endpoint()?;
        Ok(config)
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The upload endpoint, parsed
    pub fn endpoint(&self) -> Result<Url> {
        Ok(Url::parse(&self.endpoint)?)
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,reqwest=debug",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
