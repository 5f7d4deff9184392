// https://platform.openai.com/docs/api-reference/moderations/create

use serde_json::json;

use crate::media::apis::ProviderError;

use super::{service, structs::openai_moderation_response::OpenAiModerationResponse};

pub async fn check_prompt(
    prompt: &str,
    api_key: &str,
    api_url: &str,
    client: &reqwest::Client,
) -> Result<OpenAiModerationResponse, ProviderError> {
    let url = format!("{}/moderations", api_url.trim_end_matches('/'));
    let result = client
        .post(url)
        .bearer_auth(api_key)
        .json(&json!({ "input": prompt }))
        .send()
        .await;

    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("check_prompt, {:?}", e);
            return Err(service::classify_transport_error(&e));
        }
    };

    let status = res.status();
    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%e);
            return Err(ProviderError::GenerationFailed(
                "Failed to read moderation response.".to_string(),
            ));
        }
    };

    if !status.is_success() {
        return Err(service::classify_error_response(status, &text));
    }

    match serde_json::from_str(&text) {
        Ok(moderation_response) => Ok(moderation_response),
        Err(_) => {
            tracing::error!(%text);
            Err(ProviderError::GenerationFailed(
                "Failed to check prompt.".to_string(),
            ))
        }
    }
}
