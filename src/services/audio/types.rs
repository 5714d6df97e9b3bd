use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Model used for audio translation.
pub const TRANSLATION_MODEL: &str = "whisper-1";

/// Model used for speech synthesis.
pub const SPEECH_MODEL: &str = "tts-1";

/// Filename sent with uploaded audio.
pub const AUDIO_FILENAME: &str = "audio.mp3";

/// MIME type sent with uploaded audio.
pub const AUDIO_MIME_TYPE: &str = "audio/mp3";

/// Raw audio bytes, always treated as `audio/mp3`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioAsset {
    bytes: Bytes,
}

impl AudioAsset {
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Reads a bundled audio file from disk.
    pub async fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        AUDIO_MIME_TYPE
    }
}

impl From<SpeechResult> for AudioAsset {
    fn from(result: SpeechResult) -> Self {
        Self::from_bytes(result.audio)
    }
}

/// Decoded body of a translation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl Voice {
    pub const ALL: [Voice; 6] = [
        Voice::Alloy,
        Voice::Echo,
        Voice::Fable,
        Voice::Onyx,
        Voice::Nova,
        Voice::Shimmer,
    ];

    /// Wire value of the voice, e.g. `"nova"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Onyx => "onyx",
            Voice::Nova => "nova",
            Voice::Shimmer => "shimmer",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Voice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown voice: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechResponseFormat {
    Mp3,
    Opus,
    Aac,
    Flac,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: Voice,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<SpeechResponseFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl SpeechRequest {
    pub fn new(input: impl Into<String>, voice: Voice) -> Self {
        Self {
            model: SPEECH_MODEL.to_string(),
            input: input.into(),
            voice,
            response_format: None,
            speed: None,
        }
    }

    pub fn with_response_format(mut self, format: SpeechResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }
}

/// Synthesized audio exactly as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResult {
    pub audio: Bytes,
}

impl SpeechResult {
    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}
