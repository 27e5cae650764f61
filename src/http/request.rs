//! Generic request capability.
//!
//! # Responsibilities
//! - Define the request shape the translator consumes, independent of any
//!   particular HTTP client's model
//! - Provide a concrete request type for callers without their own model
//!
//! # Design Decisions
//! - Header storage is `http::HeaderMap`: names case-insensitive, order and
//!   duplicates preserved
//! - Bodies expose a declared content type and a write-out hook; buffering
//!   happens in the translator, not here

use std::io;

use ::http::header::{HeaderName, HeaderValue};
use ::http::{HeaderMap, Method};
use url::Url;

/// Request body as seen by the translator.
pub trait RequestBody: Send + Sync {
    /// Declared content type, if the caller set one.
    fn content_type(&self) -> Option<&str>;

    /// Write the full body into the sink.
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()>;
}

/// The outgoing request shape consumed by the translator.
pub trait GenericRequest: Send + Sync {
    fn method(&self) -> &Method;

    fn url(&self) -> &Url;

    fn headers(&self) -> &HeaderMap;

    fn body(&self) -> Option<&dyn RequestBody>;
}

/// In-memory request body with an optional declared content type.
pub struct BufferBody {
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl BufferBody {
    pub fn new(content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            bytes,
        }
    }
}

impl RequestBody for BufferBody {
    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        sink.write_all(&self.bytes)
    }
}

/// A concrete [`GenericRequest`] for callers without their own HTTP model.
pub struct ShimRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<BufferBody>,
}

impl ShimRequest {
    /// Create a request with the given method and target URL.
    pub fn new(method: Method, url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            method,
            url: Url::parse(url)?,
            headers: HeaderMap::new(),
            body: None,
        })
    }

    /// Shorthand for a GET request.
    pub fn get(url: &str) -> Result<Self, url::ParseError> {
        Self::new(Method::GET, url)
    }

    /// Append a header. Repeated names accumulate values.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Attach a body with an optional declared content type.
    pub fn body(mut self, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        self.body = Some(BufferBody::new(content_type, bytes));
        self
    }
}

impl GenericRequest for ShimRequest {
    fn method(&self) -> &Method {
        &self.method
    }

    fn url(&self) -> &Url {
        &self.url
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn body(&self) -> Option<&dyn RequestBody> {
        self.body.as_ref().map(|b| b as &dyn RequestBody)
    }
}
