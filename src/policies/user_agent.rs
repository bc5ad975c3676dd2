//! `User-Agent` tagging.

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::pipeline::{NextPolicy, RequestPolicy, RequestPolicyFactory, RequestPolicyOptions};

use async_trait::async_trait;
use std::sync::Arc;

pub const USER_AGENT_HEADER: &str = "User-Agent";

/// The user agent sent when none is configured, e.g. `httpline/0.1.0 (linux; x86_64)`.
pub fn default_user_agent() -> String {
    format!(
        "{}/{} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Sets `User-Agent` on requests that don't carry one yet.
pub struct UserAgentPolicy {
    next: NextPolicy,
    user_agent: String,
}

impl UserAgentPolicy {
    pub fn new(next: NextPolicy, user_agent: String) -> Self {
        Self { next, user_agent }
    }
}

#[async_trait]
impl RequestPolicy for UserAgentPolicy {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse> {
        if !request.headers.contains(USER_AGENT_HEADER) {
            request.headers.set(USER_AGENT_HEADER, self.user_agent.clone());
        }
        self.next.send(request).await
    }
}

/// Factory for [`UserAgentPolicy`].
#[derive(Debug, Clone)]
pub struct UserAgentPolicyFactory {
    user_agent: String,
}

impl RequestPolicyFactory for UserAgentPolicyFactory {
    fn create(&self, next: NextPolicy, _options: &RequestPolicyOptions) -> Arc<dyn RequestPolicy> {
        Arc::new(UserAgentPolicy::new(next, self.user_agent.clone()))
    }
}

/// Tags requests with `user_agent`, or with [`default_user_agent`] when `None`.
pub fn user_agent_policy(user_agent: Option<String>) -> Arc<dyn RequestPolicyFactory> {
    Arc::new(UserAgentPolicyFactory {
        user_agent: user_agent.unwrap_or_else(default_user_agent),
    })
}
