use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Every failure envelope carries exactly one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    MissingApiKey,
    InvalidApiKey,
    RateLimitExceeded,
    ModelUnavailable,
    GenerationFailed,
    InternalError,
    MethodNotAllowed,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match *self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
            Self::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::GenerationFailed | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Worth another attempt after a pause.
    pub fn is_transient(&self) -> bool {
        matches!(*self, Self::RateLimitExceeded | Self::ModelUnavailable)
    }
}
