use crate::errors::{MediaError, MediaResult, ValidationError};
use crate::services::audio::SpeechRequest;

pub struct AudioRequestValidator;

impl AudioRequestValidator {
    pub fn validate(request: &SpeechRequest) -> MediaResult<()> {
        if request.model.is_empty() {
            return Err(MediaError::InvalidInput(
                ValidationError::MissingRequiredField("model".to_string()),
            ));
        }

        if let Some(speed) = request.speed {
            if !(0.25..=4.0).contains(&speed) {
                return Err(MediaError::InvalidInput(ValidationError::ValueOutOfRange {
                    field: "speed".to_string(),
                    min: "0.25".to_string(),
                    max: "4.0".to_string(),
                    value: speed.to_string(),
                }));
            }
        }

        Ok(())
    }
}
