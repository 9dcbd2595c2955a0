//! Values an effect resolves to, and that a workflow is resumed with

use super::error::EffectError;
use crate::env::HttpResponse;

/// What a successfully triggered effect produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A log write was acknowledged
    Written,
    /// An HTTP request got a response
    Response(HttpResponse),
}

impl Resolution {
    /// A bodiless response with `status`, handy for test fixtures
    pub fn response(status: u16) -> Self {
        Self::Response(HttpResponse::new(status))
    }

    pub fn as_response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Response(response) => Some(response),
            Self::Written => None,
        }
    }
}

impl From<HttpResponse> for Resolution {
    fn from(response: HttpResponse) -> Self {
        Self::Response(response)
    }
}

/// The memoised result of triggering an effect
pub type Outcome = Result<Resolution, EffectError>;
