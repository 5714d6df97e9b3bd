use crate::errors::{MediaError, MediaResult, ValidationError};
use crate::services::chat::ChatRequest;

pub struct ChatRequestValidator;

impl ChatRequestValidator {
    pub fn validate(request: &ChatRequest) -> MediaResult<()> {
        if request.model.is_empty() {
            return Err(MediaError::InvalidInput(
                ValidationError::MissingRequiredField("model".to_string()),
            ));
        }

        let has_prompt = request
            .prompt()
            .map(|prompt| !prompt.trim().is_empty())
            .unwrap_or(false);
        if !has_prompt {
            return Err(MediaError::InvalidInput(
                ValidationError::MissingRequiredField("prompt".to_string()),
            ));
        }

        if !(0.0..=2.0).contains(&request.temperature) {
            return Err(MediaError::InvalidInput(ValidationError::ValueOutOfRange {
                field: "temperature".to_string(),
                min: "0.0".to_string(),
                max: "2.0".to_string(),
                value: request.temperature.to_string(),
            }));
        }

        Ok(())
    }
}
