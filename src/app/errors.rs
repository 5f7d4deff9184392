use crate::app::enums::error_code::ErrorCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    MethodNotAllowed,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError::new(
                ErrorCode::InternalError,
                "An internal server error occurred.",
            ),
            Self::MethodNotAllowed => ApiError::new(
                ErrorCode::MethodNotAllowed,
                "Method not allowed. Use POST.",
            ),
        }
    }
}
