//! Wire-level plumbing: request assembly, the HTTP round-trip, and status
//! branching ahead of response decoding.

mod http_transport;
mod multipart;
mod request_builder;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use multipart::MultipartForm;
pub use request_builder::{RequestBuilder, WireRequest};
pub use response_parser::ResponseParser;

use crate::errors::MediaResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Status, headers and fully buffered body of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl WireResponse {
    /// Returns true if the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn request_id(&self) -> Option<&str> {
        self.headers.get("x-request-id").and_then(|v| v.to_str().ok())
    }
}

/// Sends exactly one request and resolves exactly once.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: WireRequest) -> MediaResult<WireResponse>;
}

/// Sends `request` and hands back the body of a 2xx response.
///
/// Any other status is mapped to `MediaError::Api` before a decoder sees it.
pub async fn send_checked(transport: &dyn HttpTransport, request: WireRequest) -> MediaResult<Bytes> {
    let response = transport.send(request).await?;
    ResponseParser::check_status(response)
}
