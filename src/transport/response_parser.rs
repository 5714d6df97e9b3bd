use crate::errors::{ErrorMapper, MediaError, MediaResult};
use crate::transport::WireResponse;
use bytes::Bytes;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    /// Branches on status before anything reaches a success decoder.
    ///
    /// Non-2xx responses become `MediaError::Api` carrying the raw body.
    pub fn check_status(response: WireResponse) -> MediaResult<Bytes> {
        if response.is_success() {
            Ok(response.body)
        } else {
            if let Some(request_id) = response.request_id() {
                tracing::warn!(status = response.status, request_id, "Provider returned an error status");
            } else {
                tracing::warn!(status = response.status, "Provider returned an error status");
            }
            Err(ErrorMapper::from_response(response.status, &response.body))
        }
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> MediaResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            MediaError::MalformedResponse(format!(
                "Failed to deserialize JSON: {}. Data: {}",
                e,
                truncate(&String::from_utf8_lossy(data), 256)
            ))
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
