//! Cooperative deadlines.
//!
//! The pipeline has no notion of cancellation. This policy bounds everything
//! behind it with [`tokio::time::timeout`], using the request's own
//! [`timeout`](HttpRequest::timeout) when set and the configured default
//! otherwise. A request with neither passes through unbounded. When the
//! deadline passes, the inner future is dropped and the caller gets
//! [`Error::Timeout`].

use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::pipeline::{NextPolicy, RequestPolicy, RequestPolicyFactory, RequestPolicyOptions};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct TimeoutPolicy {
    next: NextPolicy,
    default_timeout: Option<Duration>,
}

impl TimeoutPolicy {
    pub fn new(next: NextPolicy, default_timeout: Option<Duration>) -> Self {
        Self {
            next,
            default_timeout,
        }
    }
}

#[async_trait]
impl RequestPolicy for TimeoutPolicy {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let Some(deadline) = request.timeout.or(self.default_timeout) else {
            return self.next.send(request).await;
        };
        match tokio::time::timeout(deadline, self.next.send(request)).await {
            Ok(result) => result,
            Err(_) => {
                debug!("Request exceeded its {:?} deadline", deadline);
                Err(Error::Timeout(deadline))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimeoutPolicyFactory {
    default_timeout: Option<Duration>,
}

impl RequestPolicyFactory for TimeoutPolicyFactory {
    fn create(&self, next: NextPolicy, _options: &RequestPolicyOptions) -> Arc<dyn RequestPolicy> {
        Arc::new(TimeoutPolicy::new(next, self.default_timeout))
    }
}

/// Fails requests that take longer than their own timeout, or than
/// `default_timeout` when they have none. `None` bounds only requests that
/// carry a timeout.
pub fn timeout_policy(default_timeout: impl Into<Option<Duration>>) -> Arc<dyn RequestPolicyFactory> {
    Arc::new(TimeoutPolicyFactory {
        default_timeout: default_timeout.into(),
    })
}
