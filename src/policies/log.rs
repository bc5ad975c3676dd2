//! Request/response logging.
//!
//! Writes one line before the request is forwarded and one after the answer
//! (or the error) comes back, at the pipeline's log level.

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::pipeline::{
    HttpPipelineLogLevel, NextPolicy, RequestPolicy, RequestPolicyFactory, RequestPolicyOptions,
};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

pub struct LogPolicy {
    next: NextPolicy,
    options: RequestPolicyOptions,
}

impl LogPolicy {
    pub fn new(next: NextPolicy, options: RequestPolicyOptions) -> Self {
        Self { next, options }
    }
}

#[async_trait]
impl RequestPolicy for LogPolicy {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method.clone();
        let url = request.url.clone();
        self.options.log(
            HttpPipelineLogLevel::Info,
            &format!("Request: {} {}", method, url),
        );

        let started = Instant::now();
        let result = self.next.send(request).await;
        let elapsed = started.elapsed();

        match &result {
            Ok(response) if response.status().is_server_error() => self.options.log(
                HttpPipelineLogLevel::Warning,
                &format!("Response: {} {} -> {} in {:?}", method, url, response.status(), elapsed),
            ),
            Ok(response) => self.options.log(
                HttpPipelineLogLevel::Info,
                &format!("Response: {} {} -> {} in {:?}", method, url, response.status(), elapsed),
            ),
            Err(e) => self.options.log(
                HttpPipelineLogLevel::Error,
                &format!("Request failed: {} {}: {} after {:?}", method, url, e, elapsed),
            ),
        }
        result
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogPolicyFactory;

impl RequestPolicyFactory for LogPolicyFactory {
    fn create(&self, next: NextPolicy, options: &RequestPolicyOptions) -> Arc<dyn RequestPolicy> {
        Arc::new(LogPolicy::new(next, *options))
    }
}

/// Logs every request and its outcome.
pub fn log_policy() -> Arc<dyn RequestPolicyFactory> {
    Arc::new(LogPolicyFactory)
}
