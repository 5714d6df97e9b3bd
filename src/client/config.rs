use crate::auth::Credentials;
use crate::errors::{ConfigurationError, MediaError, MediaResult};
use std::time::Duration;
use url::Url;

/// Default provider base URL. Endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct MediaClientConfig {
    pub credentials: Credentials,
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl MediaClientConfig {
    /// Creates a new MediaClientConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key),
            ..Self::default()
        }
    }

    /// Creates a new MediaClientConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_ORGANIZATION_ID (optional)
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com/v1)
    /// - OPENAI_TIMEOUT_SECS (optional)
    pub fn from_env() -> MediaResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ConfigurationError::MissingApiKey(
                "OPENAI_API_KEY environment variable not found".to_string(),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Ok(org_id) = std::env::var("OPENAI_ORGANIZATION_ID") {
            config.credentials = config.credentials.with_organization(org_id);
        }

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            let url = Url::parse(&base_url).map_err(|e| {
                ConfigurationError::InvalidBaseUrl(format!("Invalid OPENAI_BASE_URL: {}", e))
            })?;
            config.base_url = url;
        }

        if let Ok(timeout) = std::env::var("OPENAI_TIMEOUT_SECS") {
            let secs = timeout.parse::<u64>().map_err(|e| {
                ConfigurationError::InvalidTimeout(format!("Invalid OPENAI_TIMEOUT_SECS: {}", e))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Missing credentials are not a configuration error: operations reject
    /// them individually before touching the network.
    pub fn validate(&self) -> MediaResult<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(MediaError::Configuration(ConfigurationError::InvalidBaseUrl(
                format!("Unsupported scheme: {}", self.base_url.scheme()),
            )));
        }

        if self.base_url.cannot_be_a_base() {
            return Err(MediaError::Configuration(ConfigurationError::InvalidBaseUrl(
                "Base URL cannot carry paths".to_string(),
            )));
        }

        if self.timeout.is_zero() {
            return Err(MediaError::Configuration(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )));
        }

        Ok(())
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_organization(org_id);
        self
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full URL for an endpoint path such as `audio/speech`.
    pub fn endpoint_url(&self, path: &str) -> MediaResult<Url> {
        endpoint_url(&self.base_url, path)
    }
}

impl Default for MediaClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::none(),
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

/// Joins `path` onto `base_url` without dropping the base's own path segments.
pub fn endpoint_url(base_url: &Url, path: &str) -> MediaResult<Url> {
    let joined = format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&joined)?)
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn default_user_agent() -> String {
    format!("integrations-genmedia/{}", env!("CARGO_PKG_VERSION"))
}
