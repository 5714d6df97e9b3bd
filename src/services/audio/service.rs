use crate::auth::Credentials;
use crate::errors::MediaResult;
use crate::services::audio::{
    build_speech_request, build_translate_audio_request, decode_speech_audio,
    decode_transcription, AudioAsset, SpeechRequest, SpeechResult, TranscriptionResult,
};
use crate::transport::{send_checked, HttpTransport};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

#[async_trait]
pub trait AudioService: Send + Sync {
    /// Translates spoken audio into English text.
    async fn translate(&self, audio: AudioAsset) -> MediaResult<TranscriptionResult>;

    /// Synthesizes speech and returns the provider's audio bytes untouched.
    async fn speech(&self, request: SpeechRequest) -> MediaResult<SpeechResult>;
}

#[derive(Clone)]
pub struct AudioServiceImpl {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    base_url: Url,
    timeout: Option<Duration>,
}

impl AudioServiceImpl {
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
impl AudioService for AudioServiceImpl {
    #[instrument(name = "audio.translate", skip(self, audio), fields(audio_bytes = audio.len()))]
    async fn translate(&self, audio: AudioAsset) -> MediaResult<TranscriptionResult> {
        let mut request = build_translate_audio_request(&self.base_url, &audio, &self.credentials)?;
        request.timeout = self.timeout;

        let body = send_checked(self.transport.as_ref(), request).await?;
        let result = decode_transcription(&body)?;
        tracing::debug!(text_len = result.text.len(), "Audio translated");
        Ok(result)
    }

    #[instrument(name = "audio.speech", skip(self, request), fields(voice = %request.voice, input_len = request.input.len()))]
    async fn speech(&self, request: SpeechRequest) -> MediaResult<SpeechResult> {
        let mut wire = build_speech_request(&self.base_url, &request, &self.credentials)?;
        wire.timeout = self.timeout;

        let body = send_checked(self.transport.as_ref(), wire).await?;
        let result = decode_speech_audio(body)?;
        tracing::debug!(audio_bytes = result.len(), "Speech synthesized");
        Ok(result)
    }
}

impl std::fmt::Debug for AudioServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioServiceImpl")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
