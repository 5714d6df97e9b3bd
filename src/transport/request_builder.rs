use crate::auth::Credentials;
use crate::errors::{ConfigurationError, MediaError, MediaResult};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Method, URL, headers and body bytes, ready for a transport.
#[derive(Clone)]
pub struct WireRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// Per-request override of the transport's default timeout.
    pub timeout: Option<Duration>,
}

impl WireRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(http::header::CONTENT_TYPE.as_str())
    }
}

impl std::fmt::Debug for WireRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let shown = if value.is_sensitive() || *name == http::header::AUTHORIZATION {
                    "[REDACTED]"
                } else {
                    value.to_str().unwrap_or("<binary>")
                };
                (name.as_str(), shown)
            })
            .collect();

        f.debug_struct("WireRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body_len", &self.body.len())
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Bytes,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            timeout: None,
        }
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> MediaResult<Self> {
        let header_name = HeaderName::from_str(name.as_ref())
            .map_err(|e| MediaError::Configuration(ConfigurationError::InvalidHeader(e.to_string())))?;
        let header_value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| MediaError::Configuration(ConfigurationError::InvalidHeader(e.to_string())))?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Attaches the bearer token (and organization header, if any).
    pub fn auth(mut self, credentials: &Credentials) -> MediaResult<Self> {
        credentials.apply(&mut self.headers)?;
        Ok(self)
    }

    pub fn content_type(self, content_type: &str) -> MediaResult<Self> {
        self.header(http::header::CONTENT_TYPE.as_str(), content_type)
    }

    /// Serializes `body` as JSON and sets `Content-Type: application/json`.
    pub fn json<T: Serialize>(mut self, body: &T) -> MediaResult<Self> {
        let encoded = serde_json::to_vec(body).map_err(|e| {
            MediaError::Serialization(format!("Failed to serialize JSON: {}", e))
        })?;
        self.body = Bytes::from(encoded);
        self.content_type(mime::APPLICATION_JSON.as_ref())
    }

    pub fn body(mut self, content_type: &str, body: Bytes) -> MediaResult<Self> {
        self.body = body;
        self.content_type(content_type)
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> WireRequest {
        WireRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
            timeout: self.timeout,
        }
    }
}
