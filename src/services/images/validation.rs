use crate::errors::{MediaError, MediaResult, ValidationError};
use crate::services::images::ImageRequest;

pub struct ImageRequestValidator;

impl ImageRequestValidator {
    pub fn validate(request: &ImageRequest) -> MediaResult<()> {
        if request.prompt.trim().is_empty() {
            return Err(MediaError::InvalidInput(
                ValidationError::MissingRequiredField("prompt".to_string()),
            ));
        }

        if request.model.is_empty() {
            return Err(MediaError::InvalidInput(
                ValidationError::MissingRequiredField("model".to_string()),
            ));
        }

        if request.n == 0 || request.n > 10 {
            return Err(MediaError::InvalidInput(ValidationError::ValueOutOfRange {
                field: "n".to_string(),
                min: "1".to_string(),
                max: "10".to_string(),
                value: request.n.to_string(),
            }));
        }

        Ok(())
    }
}
