use crate::errors::categories::{ConfigurationError, NetworkError, ValidationError};
use thiserror::Error;

pub type MediaResult<T> = Result<T, MediaError>;

#[derive(Error, Debug, Clone)]
pub enum MediaError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// The provider answered with a non-2xx status. `body` is kept verbatim.
    #[error("API error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        body: String,
        message: Option<String>,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Empty response body")]
    EmptyResponse,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl MediaError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MediaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, MediaError::Api { status: 401 | 403, .. })
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, MediaError::Api { status, .. } if (400..500).contains(status))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MediaError::InvalidInput(_))
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            MediaError::Api { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MediaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest does not report the configured deadline
            MediaError::Network(NetworkError::Timeout { timeout_ms: 0 })
        } else if is_tls_failure(&err) {
            MediaError::Network(NetworkError::Tls(err.to_string()))
        } else if err.is_connect() {
            MediaError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            MediaError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<url::ParseError> for MediaError {
    fn from(err: url::ParseError) -> Self {
        MediaError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}

/// Walks the source chain looking for a certificate or handshake failure.
fn is_tls_failure(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(err);
    while let Some(inner) = source {
        let text = inner.to_string().to_ascii_lowercase();
        if text.contains("certificate") || text.contains("tls") || text.contains("handshake") {
            return true;
        }
        source = inner.source();
    }
    false
}
