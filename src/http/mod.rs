//! HTTP value types flowing through a pipeline.
//!
//! - [`headers`] - ordered, case-insensitive [`HttpHeaders`]
//! - [`request`] - the mutable [`HttpRequest`] handed from policy to policy
//! - [`response`] - the [`HttpResponse`] bound to the request that produced it
//! - [`body`] - request bodies and the transport's raw [`BodySource`]
//!
//! # Examples
//!
//! ```rust
//! use httpline::http::{HttpHeaders, HttpRequest, HttpResponse};
//! use reqwest::{Method, StatusCode};
//!
//! # async fn example() -> Result<(), httpline::Error> {
//! let request = HttpRequest::new(Method::GET, "https://example.com/")?;
//! let response = HttpResponse::new(request, StatusCode::OK, HttpHeaders::new(), "hello");
//! assert_eq!(response.text().await?, "hello");
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod headers;
pub mod request;
pub mod response;

pub use body::{BodySource, RequestBody};
pub use headers::HttpHeaders;
pub use request::{HttpRequest, HttpRequestOptions};
pub use response::HttpResponse;
