use crate::client::MediaClientConfig;
use crate::errors::{ConfigurationError, MediaError, MediaResult, NetworkError};
use crate::transport::{HttpTransport, WireRequest, WireResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::instrument;

/// HTTP transport implementation using reqwest.
///
/// One request per `send`; redirects follow reqwest's default policy and the
/// body is buffered in full before it is returned.
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &MediaClientConfig) -> MediaResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                MediaError::Configuration(ConfigurationError::ClientBuild(e.to_string()))
            })?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn map_send_error(err: reqwest::Error, timeout: Duration) -> MediaError {
        if err.is_timeout() {
            MediaError::Network(NetworkError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            })
        } else {
            MediaError::from(err)
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: WireRequest) -> MediaResult<WireResponse> {
        let timeout = request.timeout.unwrap_or(self.timeout);
        tracing::debug!(body_len = request.body.len(), "Outgoing request");

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body);

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let started = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_send_error(e, timeout))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_send_error(e, timeout))?;

        tracing::debug!(
            status,
            duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            body_len = body.len(),
            "Incoming response"
        );

        Ok(WireResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("timeout", &self.timeout)
            .finish()
    }
}
