mod categories;
mod error;
mod mapping;

pub use categories::{ConfigurationError, NetworkError, ValidationError};
pub use error::{MediaError, MediaResult};
pub use mapping::{ErrorMapper, ProviderErrorDetail, ProviderErrorResponse};
