use crate::auth::Credentials;
use crate::errors::MediaResult;
use crate::services::images::{build_image_request, decode_image_response, ImageBuffer, ImageRequest};
use crate::transport::{send_checked, HttpTransport};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

#[async_trait]
pub trait ImageService: Send + Sync {
    /// Generates one image and returns it decoded.
    async fn generate(&self, request: ImageRequest) -> MediaResult<ImageBuffer>;
}

#[derive(Clone)]
pub struct ImageServiceImpl {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ImageServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Credentials, base_url: Url) -> Self {
        Self {
            transport,
            credentials,
            base_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    #[instrument(name = "images.generate", skip(self, request), fields(size = request.size.as_str()))]
    async fn generate(&self, request: ImageRequest) -> MediaResult<ImageBuffer> {
        let mut wire = build_image_request(&self.base_url, &request, &self.credentials)?;
        wire.timeout = self.timeout;

        let body = send_checked(self.transport.as_ref(), wire).await?;
        let image = decode_image_response(&body)?;
        tracing::debug!(
            format = image.format.mime_type(),
            bytes = image.len(),
            "Image decoded"
        );
        Ok(image)
    }
}

impl std::fmt::Debug for ImageServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageServiceImpl")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
