//! Outbound request value.
//!
//! An [`HttpRequest`] is moved through the pipeline hop by hop. Each policy
//! owns it for the duration of its call, may rewrite any field, and hands it on
//! to the next policy. The transport-invoking end of the chain moves it into the
//! [`HttpResponse`](crate::http::HttpResponse), so the caller gets back the
//! request exactly as the policies left it.
//!
//! # Examples
//!
//! ```rust
//! use httpline::http::{HttpRequest, HttpRequestOptions};
//! use reqwest::Method;
//!
//! let request = HttpRequest::new(Method::GET, "https://example.com/items")?
//!     .with_header("Accept", "application/json");
//! assert_eq!(request.headers.get("accept"), Some("application/json"));
//!
//! let request = HttpRequest::try_from(HttpRequestOptions {
//!     method: Method::POST,
//!     url: "https://example.com/items".to_string(),
//!     body: Some("{}".into()),
//!     ..Default::default()
//! })?;
//! assert_eq!(request.body.as_ref().and_then(|b| b.as_text()), Some("{}"));
//! # Ok::<(), httpline::Error>(())
//! ```

use super::{HttpHeaders, RequestBody};
use crate::error::{Error, Result};

use reqwest::{Method, Url};
use std::convert::TryFrom;
use std::time::Duration;

/// Describes one outbound HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Target URL.
    pub url: Url,
    /// Request headers.
    pub headers: HttpHeaders,
    /// Optional body.
    pub body: Option<RequestBody>,
    /// Deadline for this request, honored by the timeout policy.
    pub timeout: Option<Duration>,
}

/// Recognized options when building an [`HttpRequest`].
#[derive(Debug, Clone, Default)]
pub struct HttpRequestOptions {
    pub method: Method,
    pub url: String,
    pub headers: Option<HttpHeaders>,
    pub body: Option<RequestBody>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    pub fn new(method: Method, url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;
        Ok(Self::from_url(method, url))
    }

    /// Creates a request from an already parsed URL.
    pub fn from_url(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HttpHeaders::new(),
            body: None,
            timeout: None,
        }
    }

    /// Sets a header and returns the request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the body and returns the request.
    pub fn with_body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the per-request timeout and returns the request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl TryFrom<HttpRequestOptions> for HttpRequest {
    type Error = Error;

    fn try_from(options: HttpRequestOptions) -> Result<Self> {
        let mut request = HttpRequest::new(options.method, &options.url)?;
        request.headers = options.headers.unwrap_or_default();
        request.body = options.body;
        request.timeout = options.timeout;
        Ok(request)
    }
}
