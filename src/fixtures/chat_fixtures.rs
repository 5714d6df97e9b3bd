//! Chat completion fixtures

use serde_json::json;

/// Sample chat completion response
pub fn chat_completion_response() -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-3.5-turbo-0613",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "Hello! How can I help you today?"
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 9,
            "completion_tokens": 12,
            "total_tokens": 21
        }
    })
}

/// Completion whose `choices` array is empty
pub fn chat_completion_no_choices() -> serde_json::Value {
    json!({
        "id": "chatcmpl-456",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-3.5-turbo-0613",
        "choices": []
    })
}

/// Completion whose first message carries no text
pub fn chat_completion_null_content() -> serde_json::Value {
    json!({
        "id": "chatcmpl-789",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-3.5-turbo-0613",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null
            },
            "finish_reason": "content_filter"
        }]
    })
}
