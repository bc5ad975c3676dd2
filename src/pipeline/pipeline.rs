//! Pipeline construction and execution.
//!
//! [`HttpPipeline::new`] links the factories into one chain. It starts from the
//! transport end: a terminal policy that hands the request to the
//! [`HttpClient`] and binds the raw response to it. Each factory is then
//! applied in reverse order, so the first factory in the list produces the
//! outermost policy.
//!
//! ```text
//! send ─▶ factory[0] ─▶ factory[1] ─▶ … ─▶ transport policy ─▶ HttpClient
//!      ◀─            ◀─            ◀─ … ◀─                  ◀─
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use httpline::pipeline::{HttpPipeline, HttpPipelineOptions};
//! use httpline::policies::user_agent_policy;
//! use httpline::transport::MockHttpClient;
//! use httpline::http::HttpRequest;
//! use reqwest::{Method, StatusCode};
//!
//! # async fn example() -> Result<(), httpline::Error> {
//! let client = Arc::new(MockHttpClient::with_text(StatusCode::OK, "hello"));
//! let pipeline = HttpPipeline::new(
//!     vec![user_agent_policy(Some("my-app/1.0".to_string()))],
//!     HttpPipelineOptions::new(client.clone()),
//! );
//!
//! let response = pipeline
//!     .send(HttpRequest::new(Method::GET, "http://localhost/")?)
//!     .await?;
//! assert_eq!(response.request().headers.get("user-agent"), Some("my-app/1.0"));
//! # Ok(())
//! # }
//! ```

use super::policy::{
    HttpPipelineLogLevel, NextPolicy, RequestPolicy, RequestPolicyFactory, RequestPolicyOptions,
};
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::HttpClient;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Options a pipeline is built with.
#[derive(Clone)]
pub struct HttpPipelineOptions {
    /// The transport at the end of the chain.
    pub http_client: Arc<dyn HttpClient>,
    /// Log level shared with every policy.
    pub log_level: HttpPipelineLogLevel,
}

impl HttpPipelineOptions {
    /// Options with the given transport and logging turned off.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            log_level: HttpPipelineLogLevel::Off,
        }
    }

    /// Sets the log level.
    pub fn log_level(mut self, log_level: HttpPipelineLogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}

impl fmt::Debug for HttpPipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPipelineOptions")
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

/// Innermost link: calls the transport and binds its answer to the request.
struct TransportPolicy {
    http_client: Arc<dyn HttpClient>,
}

#[async_trait]
impl RequestPolicy for TransportPolicy {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let raw = self.http_client.send_request(&request).await?;
        Ok(HttpResponse::from_raw(request, raw))
    }
}

/// An immutable chain of policies ending at a transport.
///
/// Cloning is cheap and shares the chain.
#[derive(Clone)]
pub struct HttpPipeline {
    factories: Vec<Arc<dyn RequestPolicyFactory>>,
    options: HttpPipelineOptions,
    head: NextPolicy,
}

impl HttpPipeline {
    /// Links `factories` into a chain, first factory outermost.
    pub fn new(factories: Vec<Arc<dyn RequestPolicyFactory>>, options: HttpPipelineOptions) -> Self {
        let policy_options = RequestPolicyOptions::new(options.log_level);
        let terminal: NextPolicy = Arc::new(TransportPolicy {
            http_client: options.http_client.clone(),
        });
        let head = factories
            .iter()
            .rev()
            .fold(terminal, |next, factory| factory.create(next, &policy_options));

        Self {
            factories,
            options,
            head,
        }
    }

    /// Sends a request through every policy and the transport.
    ///
    /// Errors from any policy or from the transport are returned unchanged.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.head.send(request).await
    }

    /// The factories this pipeline was built from, outermost first.
    pub fn factories(&self) -> &[Arc<dyn RequestPolicyFactory>] {
        &self.factories
    }

    pub fn options(&self) -> &HttpPipelineOptions {
        &self.options
    }

    /// The options handed to each factory.
    pub fn request_policy_options(&self) -> RequestPolicyOptions {
        RequestPolicyOptions::new(self.options.log_level)
    }
}

impl fmt::Debug for HttpPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPipeline")
            .field("factories", &self.factories.len())
            .field("options", &self.options)
            .finish()
    }
}

/// A pipeline is itself a policy, so it can be nested inside another chain.
#[async_trait]
impl RequestPolicy for HttpPipeline {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.head.send(request).await
    }
}
