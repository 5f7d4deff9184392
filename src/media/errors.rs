use crate::app::{enums::error_code::ErrorCode, models::api_error::ApiError};

use super::apis::ProviderError;

#[derive(Debug)]
pub enum MediaApiError {
    MissingApiKey,
    PromptFlagged,
}

impl MediaApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingApiKey => ApiError::new(
                ErrorCode::MissingApiKey,
                "The image API key is not configured on the server.",
            ),
            Self::PromptFlagged => ApiError::new(
                ErrorCode::InvalidInput,
                "Prompt was flagged by content moderation.",
            ),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::InvalidApiKey(_) => ApiError::new(
                ErrorCode::InvalidApiKey,
                "The image API rejected the configured API key.",
            ),
            ProviderError::RateLimited(_) => ApiError::new(
                ErrorCode::RateLimitExceeded,
                "Too many requests to the image API. Please try again shortly.",
            ),
            ProviderError::ModelUnavailable(message) => {
                ApiError::new(ErrorCode::ModelUnavailable, message)
            }
            ProviderError::ContentPolicy(message) => ApiError::new(ErrorCode::InvalidInput, message),
            ProviderError::GenerationFailed(message) => {
                ApiError::new(ErrorCode::GenerationFailed, message)
            }
            ProviderError::Transport(_) => ApiError::new(
                ErrorCode::InternalError,
                "Failed to reach the image API.",
            ),
        }
    }
}
