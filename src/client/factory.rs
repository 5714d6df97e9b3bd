use crate::client::{MediaClient, MediaClientConfig};
use crate::errors::MediaResult;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

pub struct MediaClientBuilder {
    config: Option<MediaClientConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl MediaClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
        }
    }

    pub fn with_config(mut self, config: MediaClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let config = self.config.take().unwrap_or_default();
        self.config = Some(config.with_credentials(crate::auth::Credentials::new(api_key)));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    ///
    /// A configuration without a token is accepted; each operation then fails
    /// with `InvalidInput` before any request is sent.
    pub fn build(self) -> MediaResult<MediaClient> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        if !config.credentials.is_configured() {
            tracing::debug!("Media client built without credentials");
        }

        Ok(MediaClient::new(config, transport))
    }
}

impl Default for MediaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
