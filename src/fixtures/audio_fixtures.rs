//! Audio fixtures

use serde_json::json;

/// Sample translation response
pub fn translation_response() -> serde_json::Value {
    json!({
        "text": "Hello, this is a translation of the audio file."
    })
}

/// Minimal MP3 frame header, used both as upload input and speech output
pub fn speech_audio_bytes() -> Vec<u8> {
    vec![0xFF, 0xF3, 0x44, 0xC4]
}
