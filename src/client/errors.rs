use axum::http::StatusCode;
use thiserror::Error;

use crate::app::enums::error_code::ErrorCode;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{message}")]
    Api {
        status: StatusCode,
        error: ErrorCode,
        message: String,
    },
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response from the server ({status}): {body}")]
    Decode { status: StatusCode, body: String },
}

impl ClientError {
    /// Rate limits, unavailable models and connection trouble are retried;
    /// everything else is final.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Api { error, .. } => error.is_transient(),
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Decode { .. } => false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a generation is already in progress")]
    Busy,
    #[error("enter a prompt first")]
    EmptyPrompt,
}
