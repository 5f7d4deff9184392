use crate::media::{
    dtos::generate_media_dto::GenerateMediaDto,
    models::generate_media_response::GenerateMediaResponse,
};

use super::{api_client::ApiClient, enums::generation_status::GenerationStatus, errors::SessionError};

/// What a prompt form shows: the prompt being edited, the last outcome, and
/// whether the submit control is live. Holds at most one result.
#[derive(Debug, Clone)]
pub struct GenerationSession {
    pub prompt: String,
    pub model: Option<String>,
    status: GenerationStatus,
    result: Option<GenerateMediaResponse>,
    error: Option<String>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            model: None,
            status: GenerationStatus::Pending,
            result: None,
            error: None,
        }
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn result(&self) -> Option<&GenerateMediaResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.status != GenerationStatus::Generating && !self.prompt.trim().is_empty()
    }

    /// Starts a generation, dropping whatever was shown before.
    pub fn begin(&mut self) -> Result<GenerateMediaDto, SessionError> {
        if !self.can_submit() {
            return match self.status {
                GenerationStatus::Generating => Err(SessionError::Busy),
                _ => Err(SessionError::EmptyPrompt),
            };
        }

        self.status = GenerationStatus::Generating;
        self.result = None;
        self.error = None;

        Ok(GenerateMediaDto {
            prompt: self.prompt.to_string(),
            model: self.model.clone(),
        })
    }

    pub fn complete(&mut self, result: GenerateMediaResponse) {
        self.status = GenerationStatus::Completed;
        self.result = Some(result);
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = GenerationStatus::Error;
        self.result = None;
        self.error = Some(message.into());
    }

    pub async fn submit(&mut self, client: &ApiClient) -> Result<(), SessionError> {
        let dto = self.begin()?;

        match client.generate_with_retry(&dto).await {
            Ok(result) => self.complete(result),
            Err(e) => self.fail(e.to_string()),
        }

        Ok(())
    }
}

impl Default for GenerationSession {
    fn default() -> Self {
        Self::new()
    }
}
