//! httpline wraps an HTTP transport in a composable chain of request
//! policies, so cross-cutting behavior (user agent tagging, logging, auth
//! headers, deadlines) is attached once instead of at every call site.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use httpline::{HttpPipeline, HttpPipelineOptions, HttpRequest, Error};
//! use httpline::pipeline::policy_factory;
//! use httpline::transport::MockHttpClient;
//! use reqwest::{Method, StatusCode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let client = Arc::new(MockHttpClient::with_text(StatusCode::OK, "hello"));
//! let stamp = policy_factory(|next, _options| {
//!     Arc::new(httpline::policies::UserAgentPolicy::new(next, "demo/1.0".to_string()))
//! });
//! let pipeline = HttpPipeline::new(vec![stamp], HttpPipelineOptions::new(client));
//!
//! let response = pipeline
//!     .send(HttpRequest::new(Method::GET, "http://localhost/")?)
//!     .await?;
//! assert_eq!(response.text().await?, "hello");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`http`] - request, response, header and body values
//! - [`pipeline`] - the policy contract, [`HttpPipeline`] and the default assembly
//! - [`policies`] - built-in policies
//! - [`transport`] - the [`HttpClient`] contract with reqwest and in-memory transports
//! - [`error`] - centralized error handling with the `Error` enum

pub mod error;
pub mod http;
pub mod pipeline;
pub mod policies;
pub mod transport;

pub use error::{Error, Result};
pub use http::{BodySource, HttpHeaders, HttpRequest, HttpRequestOptions, HttpResponse, RequestBody};
pub use pipeline::{
    create_default_http_pipeline, policy_factory, DefaultPipelineBuilder, HttpPipeline,
    HttpPipelineLogLevel, HttpPipelineOptions, NextPolicy, RequestPolicy, RequestPolicyFactory,
    RequestPolicyOptions,
};
pub use transport::{HttpClient, MockHttpClient, RawResponse, ReqwestHttpClient};
