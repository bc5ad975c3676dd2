//! Error handling for httpline.
//!
//! Every failure that can surface from [`HttpPipeline::send`] is an [`Error`].
//! The pipeline itself never translates or swallows errors: whatever a policy
//! or the transport returns reaches the caller unchanged.
//!
//! The variants fall into three families:
//!
//! - transport errors, raised by the [`HttpClient`] for network level failures
//! - policy errors, raised deliberately by a policy
//! - protocol errors, raised when a response does not have the expected shape
//!
//! [`HttpPipeline::send`]: crate::pipeline::HttpPipeline::send
//! [`HttpClient`]: crate::transport::HttpClient

use std::time::Duration;
use thiserror::Error;

/// Errors that can happen when sending a request through a pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Captures failures that don't fit into other categories.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value cannot be carried over the wire.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Network level failure reported by a transport.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Error from the reqwest middleware stack of the default transport.
    #[error("Reqwest middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Wraps client construction failures as well as failures while reading
    /// a response body stream.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// The request did not complete before its deadline.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Error raised deliberately by a request policy.
    #[error("Policy error: {0}")]
    Policy(String),

    /// The response did not have the expected shape.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The response body is not valid JSON for the requested type.
    #[error("JSON error")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns true for failures raised while talking to the network.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Middleware { .. } | Error::Reqwest { .. } | Error::Timeout(_)
        )
    }

    /// Returns true for errors raised by a policy.
    pub fn is_policy(&self) -> bool {
        matches!(self, Error::Policy(_))
    }

    /// Returns true when the response could not be interpreted.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::Protocol(_) | Error::Json { .. })
    }
}

/// Result type alias for httpline operations.
pub type Result<T> = std::result::Result<T, Error>;
