//! Transports: the leaf of every pipeline.
//!
//! A transport implements [`HttpClient`]. It receives the request as the
//! innermost policy left it and returns a [`RawResponse`]; binding that raw
//! response to the request is the pipeline's job.
//!
//! - [`client`] - the reqwest-backed default transport
//! - [`mock`] - an in-memory transport for tests
//!
//! # Examples
//!
//! ```rust
//! use httpline::transport::{HttpClient, MockHttpClient};
//! use httpline::http::HttpRequest;
//! use reqwest::{Method, StatusCode};
//!
//! # async fn example() -> Result<(), httpline::Error> {
//! let client = MockHttpClient::with_text(StatusCode::OK, "pong");
//! let request = HttpRequest::new(Method::GET, "http://localhost/ping")?;
//! let raw = client.send_request(&request).await?;
//! assert_eq!(raw.status, StatusCode::OK);
//! assert_eq!(client.requests().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod mock;

pub use client::{create_http_client, HttpClientConfig, ReqwestHttpClient};
pub use mock::MockHttpClient;

use crate::error::Result;
use crate::http::{BodySource, HttpHeaders, HttpRequest};

use async_trait::async_trait;
use reqwest::StatusCode;

/// What a transport hands back for a request.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HttpHeaders,
    pub body: BodySource,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HttpHeaders, body: impl Into<BodySource>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }
}

/// Sends a finalized request over the network, or pretends to.
///
/// Implementations own any connection pooling and may fail with a transport
/// error on network failures.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send_request(&self, request: &HttpRequest) -> Result<RawResponse>;
}
