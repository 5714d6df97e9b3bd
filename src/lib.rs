//! Client for a generative-media HTTP API: audio translation, speech
//! synthesis, image generation and chat completion.
//!
//! Every operation follows the same path: a pure request builder produces a
//! [`transport::WireRequest`], an [`transport::HttpTransport`] sends it once,
//! the status is checked, and a decoder turns the body into a typed result.
//!
//! ```no_run
//! use integrations_genmedia::prelude::*;
//!
//! # async fn run() -> MediaResult<()> {
//! let client = MediaClient::builder().with_api_key("sk-...").build()?;
//! let speech = client.synthesize_speech("Hello there", Voice::Nova).await?;
//! let translation = client.translate_audio(speech.into()).await?;
//! println!("{}", translation.text);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod mocks;

pub use auth::Credentials;
pub use client::{MediaClient, MediaClientBuilder, MediaClientConfig};
pub use errors::{MediaError, MediaResult};
pub use types::RequestOptions;

pub use services::{
    audio::{
        AudioAsset, AudioService, SpeechRequest, SpeechResponseFormat, SpeechResult,
        TranscriptionResult, Voice,
    },
    chat::{ChatCompletionService, ChatMessage, ChatRequest},
    images::{ImageBuffer, ImageFormat, ImageRequest, ImageService, ImageSize},
};

pub mod prelude {
    pub use crate::client::{MediaClient, MediaClientBuilder, MediaClientConfig};
    pub use crate::errors::{MediaError, MediaResult};
    pub use crate::services::audio::{AudioAsset, SpeechRequest, Voice};
    pub use crate::services::chat::ChatRequest;
    pub use crate::services::images::{ImageRequest, ImageSize};
    pub use crate::types::RequestOptions;
}
