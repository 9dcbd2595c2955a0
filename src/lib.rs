//! # effectio
//!
//! Workflows that describe their side effects instead of performing them.
//!
//! A workflow yields [`Effect`](effects::Effect)s ("write this to the log",
//! "send this request") and is resumed with their results. In production the
//! [`Runtime`](driver::Runtime) triggers every effect for real; in tests a
//! [`Fixture`](driver::Fixture) checks each yielded effect against an
//! expectation and answers with a synthetic result, so no file or network is
//! ever touched.
//!
//! ## Modules
//!
//! - `env` - Log sink and HTTP client capabilities, real and mock
//! - `effects` - Lazy, comparable effect descriptions
//! - `workflow` - The coroutine protocol and the `save_file` workflow
//! - `driver` - Production runtime and test fixture harness
//! - `app` - Configuration, logging and wiring for the binary
pub mod app;
pub mod driver;
pub mod effects;
pub mod env;
pub mod error;
pub mod workflow;

pub use error::{Error, Result};
