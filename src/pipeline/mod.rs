//! Pipeline module: the policy contract, chain construction and the default
//! assembly.
//!
//! - `policy` - [`RequestPolicy`], [`RequestPolicyFactory`] and the options
//!   shared by the policies of one pipeline
//! - `pipeline` - [`HttpPipeline`], linking factories into a chain
//! - `config` - [`DefaultPipelineConfig`]
//! - `builder` - [`DefaultPipelineBuilder`] and [`create_default_http_pipeline`]
//!
//! # Examples
//!
//! ## Default pipeline
//!
//! ```rust,no_run
//! use httpline::pipeline::create_default_http_pipeline;
//! use httpline::http::HttpRequest;
//! use reqwest::Method;
//!
//! # async fn example() -> Result<(), httpline::Error> {
//! let pipeline = create_default_http_pipeline()?;
//! let response = pipeline
//!     .send(HttpRequest::new(Method::GET, "https://httpbin.org/get")?)
//!     .await?;
//! println!("{}", response.text().await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Explicit chain
//!
//! ```rust
//! use std::sync::Arc;
//! use httpline::pipeline::{HttpPipeline, HttpPipelineOptions};
//! use httpline::policies::{log_policy, user_agent_policy};
//! use httpline::transport::MockHttpClient;
//! use reqwest::StatusCode;
//!
//! let pipeline = HttpPipeline::new(
//!     vec![user_agent_policy(None), log_policy()],
//!     HttpPipelineOptions::new(Arc::new(MockHttpClient::with_text(StatusCode::OK, ""))),
//! );
//! ```

pub mod builder;
pub mod config;
pub mod pipeline;
pub mod policy;

pub use builder::{create_default_http_pipeline, DefaultPipelineBuilder};
pub use config::DefaultPipelineConfig;
pub use pipeline::{HttpPipeline, HttpPipelineOptions};
pub use policy::{
    policy_factory, HttpPipelineLogLevel, NextPolicy, RequestPolicy, RequestPolicyFactory,
    RequestPolicyOptions,
};
