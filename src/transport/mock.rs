//! In-memory transport.
//!
//! [`MockHttpClient`] never touches the network. It answers every request with a
//! canned response, a response computed by a handler, or a transport error, and
//! records each request exactly as it arrived so tests can assert on what the
//! policies produced.

use super::{HttpClient, RawResponse};
use crate::error::{Error, Result};
use crate::http::{HttpHeaders, HttpRequest};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Handler = dyn Fn(&HttpRequest) -> Result<RawResponse> + Send + Sync;

/// A transport answering from memory.
#[derive(Clone)]
pub struct MockHttpClient {
    handler: Arc<Handler>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpClient {
    /// Answers every request with the given status, headers and body.
    pub fn new(status: StatusCode, headers: HttpHeaders, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self::with_handler(move |_| Ok(RawResponse::new(status, headers.clone(), body.clone())))
    }

    /// Answers every request with a text body and no headers.
    pub fn with_text(status: StatusCode, body: &str) -> Self {
        Self::new(status, HttpHeaders::new(), Bytes::copy_from_slice(body.as_bytes()))
    }

    /// Answers with whatever the handler computes from the request.
    pub fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<RawResponse> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every request with a transport error.
    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::with_handler(move |_| Err(Error::Transport(message.clone())))
    }

    /// Waits this long before answering.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}

impl fmt::Debug for MockHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockHttpClient")
            .field("delay", &self.delay)
            .field("requests", &self.requests().len())
            .finish()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send_request(&self, request: &HttpRequest) -> Result<RawResponse> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.handler)(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[tokio::test]
    async fn test_records_requests() {
        let client = MockHttpClient::with_text(StatusCode::OK, "ok");
        let request = HttpRequest::new(Method::POST, "http://localhost/items")
            .unwrap()
            .with_header("X-Test", "1");
        client.send_request(&request).await.unwrap();

        assert_eq!(client.requests().len(), 1);
        assert_eq!(client.last_request().unwrap(), request);
    }

    #[tokio::test]
    async fn test_handler_sees_request() {
        let client = MockHttpClient::with_handler(|request| {
            let status = if request.headers.contains("Authorization") {
                StatusCode::OK
            } else {
                StatusCode::UNAUTHORIZED
            };
            Ok(RawResponse::new(status, HttpHeaders::new(), ""))
        });
        let request = HttpRequest::new(Method::GET, "http://localhost/").unwrap();
        let raw = client.send_request(&request).await.unwrap();
        assert_eq!(raw.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = MockHttpClient::failing("connection refused");
        let request = HttpRequest::new(Method::GET, "http://localhost/").unwrap();
        let err = client.send_request(&request).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(client.requests().len(), 1);
    }
}
