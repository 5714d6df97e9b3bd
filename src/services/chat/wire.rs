//! Request builder and decoder for chat completion.

use crate::auth::Credentials;
use crate::client::endpoint_url;
use crate::errors::{MediaError, MediaResult};
use crate::services::chat::{ChatCompletionResponse, ChatRequest, ChatRequestValidator};
use crate::transport::{RequestBuilder, ResponseParser, WireRequest};
use url::Url;

pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

pub fn build_chat_request(
    base_url: &Url,
    request: &ChatRequest,
    credentials: &Credentials,
) -> MediaResult<WireRequest> {
    credentials.ensure_configured()?;
    ChatRequestValidator::validate(request)?;

    Ok(RequestBuilder::post(endpoint_url(base_url, CHAT_COMPLETIONS_PATH)?)
        .auth(credentials)?
        .json(request)?
        .build())
}

/// Parses a completion body into its typed form.
pub fn decode_chat_completion(body: &[u8]) -> MediaResult<ChatCompletionResponse> {
    ResponseParser::parse_json(body)
}

/// Text of `choices[0].message.content`.
pub fn decode_chat_content(body: &[u8]) -> MediaResult<String> {
    decode_chat_completion(body)?
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(MediaError::EmptyResponse)
}
