mod service;
mod types;
mod validation;
mod wire;


pub use service::{ChatCompletionService, ChatCompletionServiceImpl};
pub use types::{
    ChatCompletionChoice, ChatCompletionResponse, ChatMessage, ChatMessageRole, ChatRequest, Usage,
    CHAT_MODEL, DEFAULT_TEMPERATURE, SYSTEM_PROMPT,
};
pub use validation::ChatRequestValidator;
pub use wire::{build_chat_request, decode_chat_completion, decode_chat_content, CHAT_COMPLETIONS_PATH};
