//! Structured logging for the media client.
//!
//! The client itself only emits `tracing` spans and events; installing a
//! subscriber is left to the application, with [`LoggingConfig::init`] as a
//! ready-made option.

mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
