//! HTTP request and response values exchanged with an [`HttpClient`](super::HttpClient)
//!
//! These are plain data: building a request never touches the network, and two
//! requests with the same method, URL and body compare equal.

use reqwest::Method;
use std::fmt;
use thiserror::Error;
use url::Url;

/// An HTTP request description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: Vec::new(),
        }
    }

    /// Build a `POST` request carrying `body`
    pub fn post(url: Url, body: impl Into<Vec<u8>>) -> Self {
        Self::new(Method::POST, url).with_body(body)
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.body.len() == 1 { "byte" } else { "bytes" };
        write!(
            f,
            "{} {} ({} {} body)",
            self.method,
            self.url,
            self.body.len(),
            unit
        )
    }
}

/// The response an [`HttpClient`](super::HttpClient) hands back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether the status is exactly `200 OK`
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Transport-level failure while sending a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP request to {url} failed: {message}")]
pub struct HttpError {
    pub url: String,
    pub message: String,
}

impl HttpError {
    pub fn new(url: &Url, message: impl fmt::Display) -> Self {
        Self {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://example.com/upload").unwrap()
    }

    #[test]
    fn test_requests_with_same_parts_are_equal() {
        let a = HttpRequest::post(endpoint(), vec![0u8]);
        let b = HttpRequest::post(endpoint(), vec![0u8]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_requests_differ_by_body_and_method() {
        let post = HttpRequest::post(endpoint(), vec![1u8, 2]);
        assert_ne!(post, HttpRequest::post(endpoint(), vec![1u8]));
        assert_ne!(
            post,
            HttpRequest::new(Method::PUT, endpoint()).with_body(vec![1u8, 2])
        );
    }

    #[test]
    fn test_request_display() {
        let request = HttpRequest::post(endpoint(), vec![0u8]);
        assert_eq!(
            request.to_string(),
            "POST https://example.com/upload (1 byte body)"
        );
    }

    #[test]
    fn test_response_is_ok_only_for_200() {
        assert!(HttpResponse::new(200).is_ok());
        assert!(!HttpResponse::new(201).is_ok());
        assert!(!HttpResponse::new(500).is_ok());
    }
}
