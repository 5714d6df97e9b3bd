use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("HTTP client could not be built: {0}")]
    ClientBuild(String),
}

/// Input rejected before any request is built or sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No API credentials configured")]
    MissingCredentials,

    #[error("Audio asset is empty")]
    EmptyAudio,

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}
