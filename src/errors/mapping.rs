use crate::errors::MediaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ProviderErrorResponse {
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProviderErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps a non-2xx status and its raw body to `MediaError::Api`.
    ///
    /// The body is kept verbatim. When it carries the provider's
    /// `{"error": {...}}` envelope, message, type and code are lifted out.
    pub fn from_response(status: u16, body: &[u8]) -> MediaError {
        let body_str = String::from_utf8_lossy(body).into_owned();
        let detail = Self::parse_error_response(&body_str).map(|r| r.error);

        MediaError::Api {
            status,
            message: detail.as_ref().map(|d| d.message.clone()),
            error_type: detail.as_ref().and_then(|d| d.error_type.clone()),
            error_code: detail.as_ref().and_then(|d| d.code.clone()),
            body: body_str,
        }
    }

    /// Parses error response from JSON body
    pub fn parse_error_response(body: &str) -> Option<ProviderErrorResponse> {
        serde_json::from_str(body).ok()
    }
}
