use crate::client::{MediaClientBuilder, MediaClientConfig};
use crate::errors::{MediaError, MediaResult};
use crate::services::{
    audio::{AudioAsset, AudioService, AudioServiceImpl, SpeechRequest, SpeechResult, TranscriptionResult, Voice},
    chat::{ChatCompletionService, ChatCompletionServiceImpl, ChatRequest},
    images::{ImageBuffer, ImageRequest, ImageService, ImageServiceImpl},
};
use crate::transport::HttpTransport;
use crate::types::RequestOptions;
use std::future::Future;
use std::sync::Arc;
use tracing::instrument;

/// Entry point for every media operation.
///
/// Cloning is cheap and clones share the transport. Calls made concurrently
/// on the same client run independently; none waits for or cancels another.
#[derive(Clone)]
pub struct MediaClient {
    config: Arc<MediaClientConfig>,
    transport: Arc<dyn HttpTransport>,
    audio_service: AudioServiceImpl,
    images_service: ImageServiceImpl,
    chat_service: ChatCompletionServiceImpl,
    options: RequestOptions,
}

impl MediaClient {
    pub fn new(config: MediaClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let audio_service = AudioServiceImpl::new(
            transport.clone(),
            config.credentials.clone(),
            config.base_url.clone(),
        );

        let images_service = ImageServiceImpl::new(
            transport.clone(),
            config.credentials.clone(),
            config.base_url.clone(),
        );

        let chat_service = ChatCompletionServiceImpl::new(
            transport.clone(),
            config.credentials.clone(),
            config.base_url.clone(),
        );

        Self {
            config: Arc::new(config),
            transport,
            audio_service,
            images_service,
            chat_service,
            options: RequestOptions::default(),
        }
    }

    pub fn builder() -> MediaClientBuilder {
        MediaClientBuilder::new()
    }

    /// Builds a client over `reqwest` from `OPENAI_*` environment variables.
    pub fn from_env() -> MediaResult<Self> {
        MediaClientBuilder::new()
            .with_config(MediaClientConfig::from_env()?)
            .build()
    }

    pub fn config(&self) -> &MediaClientConfig {
        &self.config
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// A clone whose calls use `options` for timeout and cancellation.
    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            audio_service: self.audio_service.clone().with_timeout(options.timeout),
            images_service: self.images_service.clone().with_timeout(options.timeout),
            chat_service: self.chat_service.clone().with_timeout(options.timeout),
            options,
        }
    }

    /// Uploads `audio` and returns its English translation.
    #[instrument(name = "media.translate_audio", skip_all)]
    pub async fn translate_audio(&self, audio: AudioAsset) -> MediaResult<TranscriptionResult> {
        self.run(self.audio_service.translate(audio)).await
    }

    /// Synthesizes `text` with `voice` using the default speech settings.
    pub async fn synthesize_speech(
        &self,
        text: impl Into<String>,
        voice: Voice,
    ) -> MediaResult<SpeechResult> {
        self.synthesize_speech_with(SpeechRequest::new(text, voice))
            .await
    }

    #[instrument(name = "media.synthesize_speech", skip_all)]
    pub async fn synthesize_speech_with(&self, request: SpeechRequest) -> MediaResult<SpeechResult> {
        self.run(self.audio_service.speech(request)).await
    }

    /// Generates one default-sized image for `prompt`.
    pub async fn generate_image(&self, prompt: impl Into<String>) -> MediaResult<ImageBuffer> {
        self.generate_image_with(ImageRequest::new(prompt)).await
    }

    #[instrument(name = "media.generate_image", skip_all)]
    pub async fn generate_image_with(&self, request: ImageRequest) -> MediaResult<ImageBuffer> {
        self.run(self.images_service.generate(request)).await
    }

    /// Sends `prompt` after the fixed system message and returns the reply text.
    pub async fn generate_chat(&self, prompt: impl Into<String>) -> MediaResult<String> {
        self.generate_chat_with(ChatRequest::new(prompt)).await
    }

    #[instrument(name = "media.generate_chat", skip_all)]
    pub async fn generate_chat_with(&self, request: ChatRequest) -> MediaResult<String> {
        self.run(self.chat_service.create(request)).await
    }

    /// Resolves `operation` once, or with `Cancelled` if the token fires
    /// first. Dropping the operation future aborts the in-flight request.
    async fn run<T>(&self, operation: impl Future<Output = MediaResult<T>>) -> MediaResult<T> {
        let result = match &self.options.cancellation {
            Some(token) if token.is_cancelled() => Err(MediaError::Cancelled),
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(MediaError::Cancelled),
                    result = operation => result,
                }
            }
            None => operation.await,
        };

        if let Err(error) = &result {
            tracing::debug!(error = %error, "Media operation failed");
        }
        result
    }
}

impl std::fmt::Debug for MediaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaClient")
            .field("config", &self.config)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
