//! Error response fixtures

use serde_json::json;

fn error_body(message: &str, error_type: &str, code: Option<&str>) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": null,
            "code": code
        }
    })
}

/// Sample 401 authentication error response
pub fn error_401_invalid_api_key() -> serde_json::Value {
    error_body(
        "Incorrect API key provided: sk-bad. You can find your API key in your account settings.",
        "invalid_request_error",
        Some("invalid_api_key"),
    )
}

/// Sample 429 rate limit error response
pub fn error_429_rate_limit() -> serde_json::Value {
    error_body(
        "Rate limit reached for requests",
        "rate_limit_error",
        Some("rate_limit_exceeded"),
    )
}

/// Sample 500 internal server error response
pub fn error_500_internal_server_error() -> serde_json::Value {
    error_body(
        "The server had an error while processing your request. Sorry about that!",
        "server_error",
        None,
    )
}

/// Sample 400 content filter rejection of an image prompt
pub fn error_400_content_policy_violation() -> serde_json::Value {
    error_body(
        "Your request was rejected as a result of our safety system.",
        "invalid_request_error",
        Some("content_policy_violation"),
    )
}
