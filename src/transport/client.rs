//! The reqwest-backed default transport.
//!
//! [`create_http_client`] builds a reqwest client wrapped in reqwest-middleware
//! with tracing and transient retries, and [`ReqwestHttpClient`] adapts it to
//! the [`HttpClient`] contract.
//!
//! # Features
//!
//! - **Retry Logic**: Exponential backoff retry policy for transient failures
//! - **Tracing**: Request/response spans through `reqwest-tracing`
//! - **Proxy Support**: Optional HTTP/HTTPS proxy configuration
//! - **Custom Headers**: Default headers applied to all requests
//!
//! # Examples
//!
//! ```rust
//! use httpline::transport::{HttpClientConfig, ReqwestHttpClient};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     retries: 5,
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = ReqwestHttpClient::new(config)?;
//! # Ok(())
//! # }
//! ```

use super::{HttpClient, RawResponse};
use crate::error::{Error, Result};
use crate::http::{BodySource, HttpHeaders, HttpRequest};

use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::fmt;
use tracing::debug;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Number of retries for transient failures.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            proxy: None,
            headers: None,
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// This function sets up a reqwest client with:
/// - Tracing middleware for request/response logging
/// - Retry middleware with exponential backoff
/// - Optional proxy support
/// - Optional default headers
pub fn create_http_client(config: HttpClientConfig) -> Result<ClientWithMiddleware> {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);

    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        // Retry failed requests.
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

    Ok(client)
}

/// [`HttpClient`] over a reqwest-middleware client.
///
/// The response body is handed to the pipeline as a stream and only read when
/// one of the [`HttpResponse`](crate::http::HttpResponse) body accessors asks.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: ClientWithMiddleware,
}

impl ReqwestHttpClient {
    /// Builds the client from a configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self::from_client(create_http_client(config)?))
    }

    /// Wraps an already configured client.
    pub fn from_client(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

impl fmt::Debug for ReqwestHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestHttpClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send_request(&self, request: &HttpRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.to_header_map()?);
        if let Some(body) = &request.body {
            builder = builder.body(body.to_bytes());
        }

        debug!("Sending {} {}", request.method, request.url);
        let response = builder.send().await?;

        let status = response.status();
        let headers = HttpHeaders::from(response.headers());
        let body = BodySource::from_stream(response.bytes_stream().map_err(Error::from));
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
