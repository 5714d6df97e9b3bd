mod service;
mod types;
mod validation;
mod wire;


pub use service::{ImageService, ImageServiceImpl};
pub use types::{
    ImageBuffer, ImageData, ImageFormat, ImageRequest, ImageResponse, ImageResponseFormat,
    ImageSize, IMAGE_MODEL,
};
pub use validation::ImageRequestValidator;
pub use wire::{
    build_image_request, decode_base64_image, decode_image_response, IMAGE_GENERATIONS_PATH,
};
