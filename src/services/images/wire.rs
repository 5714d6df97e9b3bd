//! Request builder and decoders for image generation.

use crate::auth::Credentials;
use crate::client::endpoint_url;
use crate::errors::{MediaError, MediaResult};
use crate::services::images::{
    ImageBuffer, ImageFormat, ImageRequest, ImageRequestValidator, ImageResponse,
};
use crate::transport::{RequestBuilder, ResponseParser, WireRequest};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use url::Url;

pub const IMAGE_GENERATIONS_PATH: &str = "images/generations";

pub fn build_image_request(
    base_url: &Url,
    request: &ImageRequest,
    credentials: &Credentials,
) -> MediaResult<WireRequest> {
    credentials.ensure_configured()?;
    ImageRequestValidator::validate(request)?;

    Ok(RequestBuilder::post(endpoint_url(base_url, IMAGE_GENERATIONS_PATH)?)
        .auth(credentials)?
        .json(request)?
        .build())
}

/// Decodes the first image of a generation response.
pub fn decode_image_response(body: &[u8]) -> MediaResult<ImageBuffer> {
    let response: ImageResponse = ResponseParser::parse_json(body)?;
    let first = response.data.into_iter().next().ok_or(MediaError::EmptyResponse)?;
    let encoded = first.b64_json.ok_or_else(|| {
        MediaError::MalformedResponse("Image entry has no base64 payload".to_string())
    })?;
    decode_base64_image(&encoded)
}

/// Base64-decodes `encoded` and decodes the pixels as PNG, JPEG, GIF or WebP.
///
/// The format comes from the magic bytes. Data that fails to decode in that
/// format, such as a truncated stream, is a `Decode` error.
pub fn decode_base64_image(encoded: &str) -> MediaResult<ImageBuffer> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| MediaError::Decode(format!("Invalid base64 image data: {}", e)))?;

    if bytes.is_empty() {
        return Err(MediaError::Decode("Image data is empty".to_string()));
    }

    let format = infer::get(&bytes)
        .and_then(|kind| ImageFormat::from_mime_type(kind.mime_type()))
        .ok_or_else(|| MediaError::Decode("Data is not a supported image encoding".to_string()))?;

    let decoded = image::load_from_memory_with_format(&bytes, format.codec()).map_err(|e| {
        MediaError::Decode(format!("Invalid {} data: {}", format.mime_type(), e))
    })?;

    Ok(ImageBuffer {
        dimensions: (decoded.width(), decoded.height()),
        bytes: Bytes::from(bytes),
        format,
    })
}
