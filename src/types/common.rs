use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Per-call overrides applied on top of the client configuration.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Replaces the transport-wide timeout for matching requests.
    pub timeout: Option<Duration>,

    /// Cancelling the token abandons the in-flight request and resolves the
    /// call with `MediaError::Cancelled`.
    pub cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map(CancellationToken::is_cancelled)
            .unwrap_or(false)
    }
}
