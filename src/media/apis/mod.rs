use async_trait::async_trait;
use thiserror::Error;

use self::openai::models::input_spec::InputSpec;

pub mod openai;

/// A single image produced upstream. `url` is either a hosted link or a
/// `data:` URL when the API answered with inline base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
}

/// Upstream failures, classified from the response status, the structured
/// error body and the transport error kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("image API rejected the API key: {0}")]
    InvalidApiKey(String),
    #[error("image API rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("prompt rejected by content policy: {0}")]
    ContentPolicy(String),
    #[error("image generation failed: {0}")]
    GenerationFailed(String),
    #[error("image API request failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(
        &self,
        input_spec: &InputSpec,
        api_key: &str,
    ) -> Result<GeneratedImage, ProviderError>;

    async fn is_prompt_flagged(&self, prompt: &str, api_key: &str) -> Result<bool, ProviderError>;
}
