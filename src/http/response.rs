//! Response value returned by the pipeline.
//!
//! An [`HttpResponse`] owns the request that produced it together with the
//! status, headers and body. The body is read lazily: the first call to
//! [`HttpResponse::bytes`], [`HttpResponse::text`] or [`HttpResponse::json`]
//! drains the transport's [`BodySource`] and caches the result, so later calls
//! return the same content without touching the exhausted source again.

use super::{BodySource, HttpHeaders, HttpRequest};
use crate::error::{Error, Result};
use crate::transport::RawResponse;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Mutex;
use tokio::sync::OnceCell;

/// The outcome of sending an [`HttpRequest`].
pub struct HttpResponse {
    request: HttpRequest,
    status: StatusCode,
    headers: HttpHeaders,
    body: ResponseBody,
}

#[derive(Default)]
struct ResponseBody {
    source: Mutex<Option<BodySource>>,
    failure: Mutex<Option<String>>,
    bytes: OnceCell<Bytes>,
    text: OnceCell<String>,
}

impl ResponseBody {
    fn new(source: BodySource) -> Self {
        Self {
            source: Mutex::new(Some(source)),
            ..Default::default()
        }
    }

    async fn bytes(&self) -> Result<&Bytes> {
        self.bytes
            .get_or_try_init(|| async move {
                // The guard must be released before awaiting the stream.
                let source = self
                    .source
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .take();
                match source {
                    Some(source) => source.collect().await.map_err(|e| {
                        *self
                            .failure
                            .lock()
                            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(e.to_string());
                        e
                    }),
                    None => {
                        let failure = self
                            .failure
                            .lock()
                            .unwrap_or_else(|poisoned| poisoned.into_inner())
                            .clone();
                        Err(match failure {
                            Some(reason) => Error::Protocol(format!(
                                "response body could not be read earlier: {}",
                                reason
                            )),
                            None => Error::Protocol("response body was already consumed".to_string()),
                        })
                    }
                }
            })
            .await
    }

    async fn text(&self) -> Result<&str> {
        self.text
            .get_or_try_init(|| async move {
                let bytes = self.bytes().await?;
                Ok::<_, Error>(String::from_utf8_lossy(bytes).into_owned())
            })
            .await
            .map(String::as_str)
    }
}

impl HttpResponse {
    /// Creates a response bound to `request`.
    ///
    /// Policies that short-circuit the chain use this to synthesize a response.
    pub fn new(
        request: HttpRequest,
        status: StatusCode,
        headers: HttpHeaders,
        body: impl Into<BodySource>,
    ) -> Self {
        Self {
            request,
            status,
            headers,
            body: ResponseBody::new(body.into()),
        }
    }

    /// Binds a raw transport response to the request that produced it.
    pub fn from_raw(request: HttpRequest, raw: RawResponse) -> Self {
        Self::new(request, raw.status, raw.headers, raw.body)
    }

    /// The request as it was when it reached the transport.
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Consumes the response and returns its request.
    pub fn into_request(self) -> HttpRequest {
        self.request
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HttpHeaders {
        &mut self.headers
    }

    /// Replaces the body source, discarding anything already decoded.
    pub fn set_body(&mut self, body: impl Into<BodySource>) {
        self.body = ResponseBody::new(body.into());
    }

    /// Takes the body source, leaving the response without a body.
    ///
    /// A body that was already read comes back as its cached bytes. Policies
    /// wrapping the body take it, wrap it, and hand it back with [`set_body`].
    ///
    /// [`set_body`]: HttpResponse::set_body
    pub fn take_body(&mut self) -> Option<BodySource> {
        let mut body = std::mem::take(&mut self.body);
        if let Some(bytes) = body.bytes.take() {
            return Some(BodySource::Buffered(bytes));
        }
        body.source
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }

    /// Reads the whole body. The result is cached.
    pub async fn bytes(&self) -> Result<&Bytes> {
        self.body.bytes().await
    }

    /// Reads the body as text, replacing invalid UTF-8. The result is cached.
    pub async fn text(&self) -> Result<&str> {
        self.body.text().await
    }

    /// Deserializes the body from JSON.
    pub async fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(self.bytes().await?)?)
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("request", &self.request)
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body_read", &self.body.bytes.initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{stream, StreamExt};
    use reqwest::Method;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn request() -> HttpRequest {
        HttpRequest::new(Method::GET, "https://example.com/").unwrap()
    }

    #[tokio::test]
    async fn test_text_is_cached() {
        let response = HttpResponse::new(request(), StatusCode::OK, HttpHeaders::new(), "hello");
        let first = response.text().await.unwrap();
        let second = response.text().await.unwrap();
        assert_eq!(first, "hello");
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn test_stream_is_read_once() {
        let polls = Arc::new(AtomicUsize::new(0));
        let counter = polls.clone();
        let chunks = stream::iter(vec![Bytes::from_static(b"a"), Bytes::from_static(b"b")])
            .map(move |chunk| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(chunk)
            });
        let body = BodySource::from_stream(chunks);
        let response = HttpResponse::new(request(), StatusCode::OK, HttpHeaders::new(), body);

        assert_eq!(response.text().await.unwrap(), "ab");
        assert_eq!(response.bytes().await.unwrap(), &Bytes::from_static(b"ab"));
        assert_eq!(response.text().await.unwrap(), "ab");
        assert_eq!(polls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_json_body() {
        let response = HttpResponse::new(
            request(),
            StatusCode::OK,
            HttpHeaders::new(),
            r#"{"id": 7, "tags": ["a"]}"#,
        );
        let value: serde_json::Value = response.json().await.unwrap();
        assert_eq!(value["id"], 7);
        let again: serde_json::Value = response.json().await.unwrap();
        assert_eq!(value, again);
    }

    #[tokio::test]
    async fn test_invalid_json_is_protocol_error() {
        let response = HttpResponse::new(request(), StatusCode::OK, HttpHeaders::new(), "nope");
        let err = response.json::<serde_json::Value>().await.unwrap_err();
        assert!(err.is_protocol());
    }

    #[tokio::test]
    async fn test_take_body_after_read() {
        let mut response =
            HttpResponse::new(request(), StatusCode::OK, HttpHeaders::new(), "cached");
        response.text().await.unwrap();
        let source = response.take_body().unwrap();
        assert_eq!(source.collect().await.unwrap(), Bytes::from_static(b"cached"));
    }

    #[tokio::test]
    async fn test_consumed_body_is_protocol_error() {
        let mut response = HttpResponse::new(request(), StatusCode::OK, HttpHeaders::new(), "x");
        let _ = response.take_body();
        let err = response.text().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[tokio::test]
    async fn test_failed_read_is_reported_again() {
        let chunks = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(Error::Transport("reset".into())),
        ];
        let body = BodySource::from_stream(stream::iter(chunks));
        let response = HttpResponse::new(request(), StatusCode::OK, HttpHeaders::new(), body);

        let first = response.text().await.unwrap_err();
        assert!(matches!(first, Error::Transport(ref m) if m == "reset"));

        let second = response.text().await.unwrap_err();
        match second {
            Error::Protocol(message) => {
                assert!(message.contains("could not be read earlier"));
                assert!(message.contains("reset"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_body_resets_cache() {
        let mut response = HttpResponse::new(request(), StatusCode::OK, HttpHeaders::new(), "old");
        assert_eq!(response.text().await.unwrap(), "old");
        response.set_body("new");
        assert_eq!(response.text().await.unwrap(), "new");
    }
}
