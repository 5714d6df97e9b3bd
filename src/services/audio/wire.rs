//! Pure request builders and response decoders for the audio endpoints.

use crate::auth::Credentials;
use crate::client::endpoint_url;
use crate::errors::{MediaError, MediaResult, ValidationError};
use crate::services::audio::validation::AudioRequestValidator;
use crate::services::audio::{
    AudioAsset, SpeechRequest, SpeechResult, TranscriptionResult, AUDIO_FILENAME,
    AUDIO_MIME_TYPE, TRANSLATION_MODEL,
};
use crate::transport::{MultipartForm, RequestBuilder, ResponseParser, WireRequest};
use bytes::Bytes;
use url::Url;

pub const TRANSLATIONS_PATH: &str = "audio/translations";
pub const SPEECH_PATH: &str = "audio/speech";

/// Multipart upload of `audio` with `model=whisper-1`.
///
/// Empty audio is rejected here rather than sent as an empty file part.
pub fn build_translate_audio_request(
    base_url: &Url,
    audio: &AudioAsset,
    credentials: &Credentials,
) -> MediaResult<WireRequest> {
    credentials.ensure_configured()?;
    if audio.is_empty() {
        return Err(ValidationError::EmptyAudio.into());
    }

    let form = MultipartForm::new()
        .file("file", AUDIO_FILENAME, AUDIO_MIME_TYPE, audio.bytes().clone())
        .text("model", TRANSLATION_MODEL);
    let (content_type, body) = form.build();

    Ok(RequestBuilder::post(endpoint_url(base_url, TRANSLATIONS_PATH)?)
        .auth(credentials)?
        .body(&content_type, body)?
        .build())
}

/// JSON body `{model, input, voice}` plus any optional speech settings.
pub fn build_speech_request(
    base_url: &Url,
    request: &SpeechRequest,
    credentials: &Credentials,
) -> MediaResult<WireRequest> {
    credentials.ensure_configured()?;
    AudioRequestValidator::validate(request)?;

    Ok(RequestBuilder::post(endpoint_url(base_url, SPEECH_PATH)?)
        .auth(credentials)?
        .json(request)?
        .build())
}

/// Parses a `{"text": ...}` body.
pub fn decode_transcription(body: &[u8]) -> MediaResult<TranscriptionResult> {
    ResponseParser::parse_json(body)
}

/// The body is the audio itself; only emptiness is checked.
pub fn decode_speech_audio(body: Bytes) -> MediaResult<SpeechResult> {
    if body.is_empty() {
        return Err(MediaError::EmptyResponse);
    }
    Ok(SpeechResult { audio: body })
}
