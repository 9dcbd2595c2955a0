//! Resource layer lent to effects
//!
//! Effects describe what they would do with a log sink or an HTTP client; this
//! module defines those capabilities and provides:
//! - **Traits**: [`LogSink`] and [`HttpClient`]
//! - **Real Implementations**: [`FileLogSink`] (append-mode file) and [`ReqwestClient`]
//! - **Mock Implementations**: in-memory, call-recording [`MockLogSink`] and [`MockHttpClient`]
//! - **Combined Environment**: [`AppEnv`] bundles one of each
//!
//! # Usage
//!
//! ```no_run
//! use effectio::env::{AppEnv, LogSink};
//!
//! # async fn example() -> std::io::Result<()> {
//! let env = AppEnv::real("log.txt").await?;
//! env.sink.write("started").await?;
//! # Ok(())
//! # }
//! ```

mod app;
mod http;
mod mock;
mod real;
mod traits;

pub use app::AppEnv;
pub use http::{HttpError, HttpRequest, HttpResponse};
pub use mock::{MockHttpClient, MockLogSink};
pub use real::{FileLogSink, ReqwestClient};
pub use traits::{HttpClient, LogSink};
