//! The request policy contract.
//!
//! A [`RequestPolicy`] is one link of the chain. It owns the request for the
//! duration of its `send` and may:
//!
//! - rewrite the request before forwarding it to `next`
//! - answer without forwarding at all, by synthesizing an [`HttpResponse`]
//! - rewrite the response returned by `next`
//! - catch an error from `next` and turn it into a response or another error
//!
//! Request-phase work therefore runs outermost first and response-phase work
//! innermost first. Policies are built once per pipeline and shared by every
//! concurrent `send`, so they keep per-request state on the request and the
//! response only.
//!
//! A [`RequestPolicyFactory`] builds a policy from the next link and the
//! pipeline's [`RequestPolicyOptions`]. Closures with the right signature are
//! factories; [`policy_factory`] boxes one.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use httpline::http::{HttpRequest, HttpResponse};
//! use httpline::pipeline::{policy_factory, NextPolicy, RequestPolicy};
//!
//! struct ApiKeyPolicy {
//!     next: NextPolicy,
//!     key: String,
//! }
//!
//! #[async_trait]
//! impl RequestPolicy for ApiKeyPolicy {
//!     async fn send(&self, mut request: HttpRequest) -> httpline::Result<HttpResponse> {
//!         request.headers.set("X-Api-Key", self.key.clone());
//!         self.next.send(request).await
//!     }
//! }
//!
//! let factory = policy_factory(|next, _options| {
//!     Arc::new(ApiKeyPolicy { next, key: "secret".to_string() })
//! });
//! ```

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One link of a pipeline.
#[async_trait]
pub trait RequestPolicy: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// The link a policy forwards to.
pub type NextPolicy = Arc<dyn RequestPolicy>;

/// Builds a policy in front of `next`.
pub trait RequestPolicyFactory: Send + Sync {
    fn create(&self, next: NextPolicy, options: &RequestPolicyOptions) -> Arc<dyn RequestPolicy>;
}

impl<F> RequestPolicyFactory for F
where
    F: Fn(NextPolicy, &RequestPolicyOptions) -> Arc<dyn RequestPolicy> + Send + Sync,
{
    fn create(&self, next: NextPolicy, options: &RequestPolicyOptions) -> Arc<dyn RequestPolicy> {
        self(next, options)
    }
}

/// Boxes a closure as a factory, pinning down its signature.
pub fn policy_factory<F>(factory: F) -> Arc<dyn RequestPolicyFactory>
where
    F: Fn(NextPolicy, &RequestPolicyOptions) -> Arc<dyn RequestPolicy> + Send + Sync + 'static,
{
    Arc::new(factory)
}

/// How much a pipeline's policies log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HttpPipelineLogLevel {
    /// Nothing is logged.
    #[default]
    Off,
    Error,
    Warning,
    Info,
}

/// Options shared by every policy of one pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestPolicyOptions {
    log_level: HttpPipelineLogLevel,
}

impl RequestPolicyOptions {
    pub fn new(log_level: HttpPipelineLogLevel) -> Self {
        Self { log_level }
    }

    pub fn log_level(&self) -> HttpPipelineLogLevel {
        self.log_level
    }

    /// Whether a message at `level` would be logged.
    pub fn should_log(&self, level: HttpPipelineLogLevel) -> bool {
        level != HttpPipelineLogLevel::Off && level <= self.log_level
    }

    /// Logs `message` through tracing when `level` is enabled.
    pub fn log(&self, level: HttpPipelineLogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }
        match level {
            HttpPipelineLogLevel::Off => {}
            HttpPipelineLogLevel::Error => error!("{}", message),
            HttpPipelineLogLevel::Warning => warn!("{}", message),
            HttpPipelineLogLevel::Info => info!("{}", message),
        }
    }
}
