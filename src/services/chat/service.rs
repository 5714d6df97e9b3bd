use crate::auth::Credentials;
use crate::errors::MediaResult;
use crate::services::chat::{build_chat_request, decode_chat_content, ChatRequest};
use crate::transport::{send_checked, HttpTransport};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    /// Returns the assistant text of the first choice.
    async fn create(&self, request: ChatRequest) -> MediaResult<String>;
}

#[derive(Clone)]
pub struct ChatCompletionServiceImpl {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ChatCompletionServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Credentials, base_url: Url) -> Self {
        Self {
            transport,
            credentials,
            base_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ChatCompletionService for ChatCompletionServiceImpl {
    #[instrument(name = "chat.create", skip(self, request), fields(model = %request.model))]
    async fn create(&self, request: ChatRequest) -> MediaResult<String> {
        let mut wire = build_chat_request(&self.base_url, &request, &self.credentials)?;
        wire.timeout = self.timeout;

        let body = send_checked(self.transport.as_ref(), wire).await?;
        decode_chat_content(&body)
    }
}

impl std::fmt::Debug for ChatCompletionServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionServiceImpl")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
