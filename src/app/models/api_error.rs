use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::enums::error_code::ErrorCode;

use super::request_meta::RequestMeta;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub error: ErrorCode,
    pub message: String,
    pub meta: Option<RequestMeta>,
}

impl ApiError {
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error.status(),
            error,
            message: message.into(),
            meta: None,
        }
    }

    /// Pins the envelope to the request that produced the error.
    pub fn with_meta(mut self, meta: RequestMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let meta = self.meta.clone().unwrap_or_default();

        ErrorEnvelope {
            success: false,
            error: self.error,
            message: self.message.to_string(),
            request_id: meta.request_id,
            generated_at: meta.generated_at,
        }
    }
}

/// Failure shape of every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorCode,
    pub message: String,
    pub request_id: String,
    pub generated_at: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(self.envelope())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");

        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                "Request body must be JSON (Content-Type: application/json).".to_string()
            }
            JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON.".to_string(),
            JsonRejection::JsonDataError(e) => e.body_text(),
            other => other.body_text(),
        };

        ApiError::new(ErrorCode::InvalidInput, message)
    }
}
