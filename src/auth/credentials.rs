use crate::errors::{ConfigurationError, MediaError, MediaResult, ValidationError};
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, Secret, SecretString};

/// Header carrying the optional organization identifier.
pub const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Static bearer token plus optional organization id.
///
/// Immutable once built; the client shares it read-only across calls.
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: Option<SecretString>,
    organization_id: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            api_key: (!api_key.is_empty()).then(|| Secret::new(api_key)),
            organization_id: None,
        }
    }

    /// Credentials with no token. Every operation fails fast with them.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, org_id: impl Into<String>) -> Self {
        let org_id = org_id.into();
        self.organization_id = (!org_id.is_empty()).then_some(org_id);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    /// Fails with `MissingCredentials` when no token is set.
    pub fn ensure_configured(&self) -> MediaResult<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ValidationError::MissingCredentials.into())
        }
    }

    /// Adds `Authorization: Bearer <token>` and, if set, the organization header.
    pub fn apply(&self, headers: &mut HeaderMap) -> MediaResult<()> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(MediaError::InvalidInput(ValidationError::MissingCredentials))?;

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|_| {
                ConfigurationError::InvalidHeader("API key is not a valid header value".to_string())
            })?;
        auth_value.set_sensitive(true);
        headers.insert(http::header::AUTHORIZATION, auth_value);

        if let Some(org_id) = &self.organization_id {
            let org_value = HeaderValue::from_str(org_id).map_err(|_| {
                ConfigurationError::InvalidHeader("Invalid organization ID format".to_string())
            })?;
            headers.insert(ORGANIZATION_HEADER, org_value);
        }

        Ok(())
    }

    /// Returns the last four characters of the token for debugging.
    pub fn api_key_hint(&self) -> String {
        match &self.api_key {
            Some(key) => {
                let chars: Vec<char> = key.expose_secret().chars().collect();
                if chars.len() > 4 {
                    let tail: String = chars[chars.len() - 4..].iter().collect();
                    format!("...{tail}")
                } else {
                    "****".to_string()
                }
            }
            None => "<unset>".to_string(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("organization_id", &self.organization_id)
            .finish()
    }
}
