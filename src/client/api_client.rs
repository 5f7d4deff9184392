use std::time::Duration;

use tokio_retry::{strategy::ExponentialBackoff, RetryIf};

use crate::{
    app::models::api_error::ErrorEnvelope,
    media::{
        dtos::generate_media_dto::GenerateMediaDto,
        models::generate_media_response::GenerateMediaResponse,
    },
};

use super::errors::ClientError;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: usize,
    /// Delay before the first retry; each further retry doubles it.
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
        }
    }
}

/// Talks to a running instance of this service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_policy: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub async fn generate(
        &self,
        dto: &GenerateMediaDto,
    ) -> Result<GenerateMediaResponse, ClientError> {
        let url = format!("{}/api/generate-image", self.base_url);
        let res = self.http.post(url).json(dto).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if status.is_success() {
            return match serde_json::from_str::<GenerateMediaResponse>(&body) {
                Ok(response) => Ok(response),
                Err(_) => Err(ClientError::Decode { status, body }),
            };
        }

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => Err(ClientError::Api {
                status,
                error: envelope.error,
                message: envelope.message,
            }),
            Err(_) => Err(ClientError::Decode { status, body }),
        }
    }

    /// [`generate`](Self::generate), retried with exponential backoff while
    /// the failure is transient.
    pub async fn generate_with_retry(
        &self,
        dto: &GenerateMediaDto,
    ) -> Result<GenerateMediaResponse, ClientError> {
        // ExponentialBackoff yields base^n * factor; base 2 doubles each step.
        let factor = (self.retry_policy.base_delay.as_millis() as u64 / 2).max(1);
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(self.retry_policy.max_delay)
            .take(self.retry_policy.max_retries);

        RetryIf::start(
            strategy,
            || self.generate(dto),
            |e: &ClientError| {
                let retry = e.is_transient();
                if retry {
                    tracing::warn!(%e, "transient failure, retrying");
                }
                retry
            },
        )
        .await
    }
}
