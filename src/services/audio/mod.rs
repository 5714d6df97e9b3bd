mod service;
mod types;
mod validation;
mod wire;


pub use service::{AudioService, AudioServiceImpl};
pub use types::{
    AudioAsset, SpeechRequest, SpeechResponseFormat, SpeechResult, TranscriptionResult, Voice,
    AUDIO_FILENAME, AUDIO_MIME_TYPE, SPEECH_MODEL, TRANSLATION_MODEL,
};
pub use validation::AudioRequestValidator;
pub use wire::{
    build_speech_request, build_translate_audio_request, decode_speech_audio,
    decode_transcription, SPEECH_PATH, TRANSLATIONS_PATH,
};
