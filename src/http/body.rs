//! Request and response bodies.
//!
//! Requests carry a [`RequestBody`], either text or raw bytes. Responses carry a
//! [`BodySource`] produced by the transport: a buffer already in memory or a
//! stream of chunks read on demand.

use crate::error::Result;

use bytes::{Bytes, BytesMut};
use futures::stream::{BoxStream, Stream, StreamExt};
use std::fmt;

/// Body of an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// UTF-8 text.
    Text(String),
    /// Arbitrary bytes.
    Binary(Bytes),
}

impl RequestBody {
    /// Returns the text content, if this is a text body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestBody::Text(text) => Some(text),
            RequestBody::Binary(_) => None,
        }
    }

    /// Returns the body as bytes for the wire.
    pub fn to_bytes(&self) -> Bytes {
        match self {
            RequestBody::Text(text) => Bytes::from(text.clone()),
            RequestBody::Binary(bytes) => bytes.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RequestBody::Text(text) => text.len(),
            RequestBody::Binary(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for RequestBody {
    fn from(value: String) -> Self {
        RequestBody::Text(value)
    }
}

impl From<&str> for RequestBody {
    fn from(value: &str) -> Self {
        RequestBody::Text(value.to_string())
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(value: Vec<u8>) -> Self {
        RequestBody::Binary(Bytes::from(value))
    }
}

impl From<Bytes> for RequestBody {
    fn from(value: Bytes) -> Self {
        RequestBody::Binary(value)
    }
}

/// Raw body of a response as handed over by a transport.
pub enum BodySource {
    /// The whole body is already in memory.
    Buffered(Bytes),
    /// The body is read chunk by chunk.
    Stream(BoxStream<'static, Result<Bytes>>),
}

impl BodySource {
    /// An empty body.
    pub fn empty() -> Self {
        BodySource::Buffered(Bytes::new())
    }

    /// Wraps a stream of chunks.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes>> + Send + 'static,
    {
        BodySource::Stream(stream.boxed())
    }

    /// Reads the whole body into memory.
    pub async fn collect(self) -> Result<Bytes> {
        match self {
            BodySource::Buffered(bytes) => Ok(bytes),
            BodySource::Stream(mut stream) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf.freeze())
            }
        }
    }
}

impl Default for BodySource {
    fn default() -> Self {
        BodySource::empty()
    }
}

impl From<Bytes> for BodySource {
    fn from(value: Bytes) -> Self {
        BodySource::Buffered(value)
    }
}

impl From<Vec<u8>> for BodySource {
    fn from(value: Vec<u8>) -> Self {
        BodySource::Buffered(Bytes::from(value))
    }
}

impl From<String> for BodySource {
    fn from(value: String) -> Self {
        BodySource::Buffered(Bytes::from(value))
    }
}

impl From<&'static str> for BodySource {
    fn from(value: &'static str) -> Self {
        BodySource::Buffered(Bytes::from_static(value.as_bytes()))
    }
}

impl fmt::Debug for BodySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodySource::Buffered(bytes) => f.debug_tuple("Buffered").field(&bytes.len()).finish(),
            BodySource::Stream(_) => f.write_str("Stream"),
        }
    }
}
