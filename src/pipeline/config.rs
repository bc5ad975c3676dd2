//! Configuration for the default pipeline.
//!
//! [`DefaultPipelineConfig`] holds everything [`DefaultPipelineBuilder`] can
//! override. Its [`Default`] is what [`create_default_http_pipeline`] uses.
//!
//! [`DefaultPipelineBuilder`]: super::DefaultPipelineBuilder
//! [`create_default_http_pipeline`]: super::create_default_http_pipeline

use super::policy::{HttpPipelineLogLevel, RequestPolicyFactory};
use crate::transport::{HttpClient, HttpClientConfig};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Configuration structure for the default pipeline.
#[derive(Clone)]
pub struct DefaultPipelineConfig {
    /// Value of the `User-Agent` header. `None` uses the crate's own.
    pub user_agent: Option<String>,
    /// Default deadline for requests without their own. `None` leaves them unbounded.
    pub timeout: Option<Duration>,
    /// Log level shared with the policies.
    pub log_level: HttpPipelineLogLevel,
    /// Settings for the reqwest transport.
    pub http_client_config: HttpClientConfig,
    /// Transport replacing the reqwest one.
    pub http_client: Option<Arc<dyn HttpClient>>,
    /// Policies placed after the defaults, closest to the transport.
    pub additional_policies: Vec<Arc<dyn RequestPolicyFactory>>,
}

impl fmt::Debug for DefaultPipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultPipelineConfig")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("log_level", &self.log_level)
            .field("http_client_config", &self.http_client_config)
            .field("http_client", &self.http_client.is_some())
            .field("additional_policies", &self.additional_policies.len())
            .finish()
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            timeout: None,
            log_level: HttpPipelineLogLevel::Warning,
            http_client_config: HttpClientConfig::default(),
            http_client: None,
            additional_policies: Vec::new(),
        }
    }
}
