//! Default pipeline assembly.
//!
//! [`create_default_http_pipeline`] returns a ready pipeline with the standard
//! policy order over the reqwest transport:
//!
//! 1. user agent
//! 2. logging
//! 3. timeout, honoring each request's own timeout and the configured default
//! 4. any additional policies
//!
//! [`DefaultPipelineBuilder`] changes the pieces. None of this is required:
//! building an [`HttpPipeline`] directly bypasses every default.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use httpline::pipeline::{DefaultPipelineBuilder, HttpPipelineLogLevel};
//!
//! # fn example() -> Result<(), httpline::Error> {
//! let pipeline = DefaultPipelineBuilder::new()
//!     .user_agent("my-service/2.1")
//!     .timeout(Duration::from_secs(30))
//!     .log_level(HttpPipelineLogLevel::Info)
//!     .retries(5)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::config::DefaultPipelineConfig;
use super::pipeline::{HttpPipeline, HttpPipelineOptions};
use super::policy::{HttpPipelineLogLevel, RequestPolicyFactory};
use crate::error::Result;
use crate::policies::{log_policy, timeout_policy, user_agent_policy};
use crate::transport::{HttpClient, ReqwestHttpClient};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Proxy;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builds a pipeline with the default policies and the reqwest transport.
pub fn create_default_http_pipeline() -> Result<HttpPipeline> {
    DefaultPipelineBuilder::new().build()
}

/// A builder used to create the default [`HttpPipeline`].
#[derive(Default)]
pub struct DefaultPipelineBuilder {
    config: DefaultPipelineConfig,
}

impl DefaultPipelineBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DefaultPipelineBuilder::default()
    }

    /// Sets the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the default deadline for every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Sets the log level shared with the policies.
    pub fn log_level(mut self, log_level: HttpPipelineLogLevel) -> Self {
        self.config.log_level = log_level;
        self
    }

    /// Set the number of transient retries of the reqwest transport.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.http_client_config.retries = retries;
        self
    }

    /// Routes the reqwest transport through a proxy.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.http_client_config.proxy = Some(proxy);
        self
    }

    fn new_header(&self) -> HeaderMap {
        match self.config.http_client_config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Adds default headers sent by the reqwest transport.
    ///
    /// Can be called multiple times; the maps are merged.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.http_client_config.headers = Some(new);
        self
    }

    /// Adds one default header sent by the reqwest transport.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.http_client_config.headers = Some(new);
        self
    }

    /// Replaces the reqwest transport.
    ///
    /// Retries, proxy and default headers only apply to the reqwest transport
    /// and are ignored once another client is set.
    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.config.http_client = Some(http_client);
        self
    }

    /// Appends a policy after the defaults.
    pub fn policy(mut self, factory: Arc<dyn RequestPolicyFactory>) -> Self {
        self.config.additional_policies.push(factory);
        self
    }

    /// Create the [`HttpPipeline`] with the specified options.
    pub fn build(self) -> Result<HttpPipeline> {
        let config = self.config;

        let http_client: Arc<dyn HttpClient> = match config.http_client {
            Some(client) => client,
            None => Arc::new(ReqwestHttpClient::new(config.http_client_config)?),
        };

        let mut factories = vec![
            user_agent_policy(config.user_agent),
            log_policy(),
            timeout_policy(config.timeout),
        ];
        factories.extend(config.additional_policies);

        debug!("Assembled default pipeline with {} policies", factories.len());
        Ok(HttpPipeline::new(
            factories,
            HttpPipelineOptions::new(http_client).log_level(config.log_level),
        ))
    }
}
