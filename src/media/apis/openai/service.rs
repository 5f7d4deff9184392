use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::media::apis::{GeneratedImage, ImageGenerator, ProviderError};

use super::{
    models::input_spec::InputSpec,
    moderation,
    structs::{
        openai_error_response::OpenAiErrorResponse, openai_images_response::OpenAiImagesResponse,
    },
};

pub struct OpenAiImageGenerator {
    client: reqwest::Client,
    api_url: String,
}

impl OpenAiImageGenerator {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate_image(
        &self,
        input_spec: &InputSpec,
        api_key: &str,
    ) -> Result<GeneratedImage, ProviderError> {
        let url = format!("{}/images/generations", self.api_url);
        let result = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(input_spec)
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(%e, "image generation request failed");
                return Err(classify_transport_error(&e));
            }
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(%e);
                return Err(ProviderError::GenerationFailed(
                    "Failed to read image API response.".to_string(),
                ));
            }
        };

        if !status.is_success() {
            let error = classify_error_response(status, &text);
            tracing::warn!(%status, %error, "image API returned an error");
            return Err(error);
        }

        let images_response: OpenAiImagesResponse = match serde_json::from_str(&text) {
            Ok(images_response) => images_response,
            Err(_) => {
                tracing::error!(%text);
                return Err(ProviderError::GenerationFailed(
                    "Image API returned an unreadable response.".to_string(),
                ));
            }
        };

        first_image(images_response)
    }

    async fn is_prompt_flagged(&self, prompt: &str, api_key: &str) -> Result<bool, ProviderError> {
        let moderation_response =
            moderation::check_prompt(prompt, api_key, &self.api_url, &self.client).await?;

        Ok(moderation_response.is_flagged())
    }
}

fn first_image(images_response: OpenAiImagesResponse) -> Result<GeneratedImage, ProviderError> {
    let Some(data) = images_response.data.into_iter().next() else {
        return Err(ProviderError::GenerationFailed(
            "Image API generated no images.".to_string(),
        ));
    };

    let url = match (data.url, data.b64_json) {
        (Some(url), _) if !url.is_empty() => url,
        (_, Some(b64_json)) if !b64_json.is_empty() => {
            ["data:image/png;base64,", &b64_json].concat()
        }
        _ => {
            return Err(ProviderError::GenerationFailed(
                "Image API returned an image without data.".to_string(),
            ))
        }
    };

    Ok(GeneratedImage {
        url,
        revised_prompt: data.revised_prompt,
    })
}

/// Maps a non-success response onto a [`ProviderError`] using the status
/// code and the `error.code` field, never the wording of `error.message`.
pub fn classify_error_response(status: StatusCode, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<OpenAiErrorResponse>(body)
        .ok()
        .map(|res| res.error);

    let message = detail
        .as_ref()
        .map(|detail| detail.message.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Image API responded with {}.", status));
    let code = detail.as_ref().and_then(|detail| detail.code()).unwrap_or("");

    if let Some(detail) = &detail {
        tracing::debug!(%status, code, kind = ?detail.kind, "image API error body");
    }

    match (status, code) {
        (StatusCode::UNAUTHORIZED, _) | (_, "invalid_api_key") => {
            ProviderError::InvalidApiKey(message)
        }
        (StatusCode::TOO_MANY_REQUESTS, _) => ProviderError::RateLimited(message),
        (StatusCode::NOT_FOUND, _) | (_, "model_not_found") => {
            ProviderError::ModelUnavailable(message)
        }
        (
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT,
            _,
        ) => ProviderError::ModelUnavailable(message),
        (_, "content_policy_violation") => ProviderError::ContentPolicy(message),
        _ => ProviderError::GenerationFailed(message),
    }
}

pub fn classify_transport_error(e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() || e.is_connect() {
        ProviderError::ModelUnavailable("Image API is unreachable.".to_string())
    } else {
        ProviderError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{http::StatusCode as AxumStatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::media::models::dimensions::Dimensions;

    async fn spawn_upstream(router: Router) -> String {
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(router.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);

        format!("http://{}/v1", addr)
    }

    fn generator(api_url: &str) -> OpenAiImageGenerator {
        OpenAiImageGenerator::new(api_url, Duration::from_secs(5)).unwrap()
    }

    fn input_spec() -> InputSpec {
        InputSpec::new("dall-e-2", "A sunset over mountains", &Dimensions::square(512))
    }

    #[test]
    fn classifies_by_status_and_code() {
        let body = |code: &str| {
            json!({ "error": { "message": "nope", "type": "x", "code": code } }).to_string()
        };

        assert_eq!(
            classify_error_response(StatusCode::UNAUTHORIZED, "{}"),
            ProviderError::InvalidApiKey("Image API responded with 401 Unauthorized.".to_string())
        );
        assert!(matches!(
            classify_error_response(StatusCode::BAD_REQUEST, &body("invalid_api_key")),
            ProviderError::InvalidApiKey(_)
        ));
        assert!(matches!(
            classify_error_response(StatusCode::TOO_MANY_REQUESTS, &body("insufficient_quota")),
            ProviderError::RateLimited(_)
        ));
        assert!(matches!(
            classify_error_response(StatusCode::BAD_REQUEST, &body("model_not_found")),
            ProviderError::ModelUnavailable(_)
        ));
        assert!(matches!(
            classify_error_response(StatusCode::SERVICE_UNAVAILABLE, "upstream down"),
            ProviderError::ModelUnavailable(_)
        ));
        assert!(matches!(
            classify_error_response(StatusCode::BAD_REQUEST, &body("content_policy_violation")),
            ProviderError::ContentPolicy(_)
        ));
        assert_eq!(
            classify_error_response(StatusCode::BAD_REQUEST, &body("invalid_size")),
            ProviderError::GenerationFailed("nope".to_string())
        );
    }

    #[test]
    fn message_wording_does_not_drive_classification() {
        let body = json!({
            "error": { "message": "Rate limit reached for images, model not found", "code": null }
        })
        .to_string();

        assert!(matches!(
            classify_error_response(StatusCode::INTERNAL_SERVER_ERROR, &body),
            ProviderError::GenerationFailed(_)
        ));
    }

    #[tokio::test]
    async fn returns_hosted_url() {
        let router = Router::new().route(
            "/v1/images/generations",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["size"], "512x512");
                assert_eq!(body["n"], 1);
                Json(json!({
                    "created": 1700000000,
                    "data": [{ "url": "https://images.example/abc.png" }]
                }))
            }),
        );
        let api_url = spawn_upstream(router).await;

        let image = generator(&api_url)
            .generate_image(&input_spec(), "sk-test")
            .await
            .unwrap();

        assert_eq!(image.url, "https://images.example/abc.png");
    }

    #[tokio::test]
    async fn turns_base64_into_data_url() {
        let router = Router::new().route(
            "/v1/images/generations",
            post(|| async { Json(json!({ "created": 1, "data": [{ "b64_json": "iVBORw0K" }] })) }),
        );
        let api_url = spawn_upstream(router).await;

        let image = generator(&api_url)
            .generate_image(&input_spec(), "sk-test")
            .await
            .unwrap();

        assert_eq!(image.url, "data:image/png;base64,iVBORw0K");
    }

    #[tokio::test]
    async fn sends_bearer_key_and_maps_rejection() {
        let router = Router::new().route(
            "/v1/images/generations",
            post(|headers: axum::http::HeaderMap| async move {
                assert_eq!(headers["authorization"], "Bearer sk-wrong");
                (
                    AxumStatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": { "message": "Incorrect API key provided", "code": "invalid_api_key" }
                    })),
                )
            }),
        );
        let api_url = spawn_upstream(router).await;

        let error = generator(&api_url)
            .generate_image(&input_spec(), "sk-wrong")
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ProviderError::InvalidApiKey("Incorrect API key provided".to_string())
        );
    }

    #[tokio::test]
    async fn empty_data_is_a_generation_failure() {
        let router = Router::new().route(
            "/v1/images/generations",
            post(|| async { Json(json!({ "created": 1, "data": [] })) }),
        );
        let api_url = spawn_upstream(router).await;

        let error = generator(&api_url)
            .generate_image(&input_spec(), "sk-test")
            .await
            .unwrap_err();

        assert!(matches!(error, ProviderError::GenerationFailed(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_model_unavailable() {
        // Nothing listens on port 9 locally.
        let error = generator("http://127.0.0.1:9/v1")
            .generate_image(&input_spec(), "sk-test")
            .await
            .unwrap_err();

        assert!(matches!(error, ProviderError::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn reads_moderation_verdict() {
        let router = Router::new().route(
            "/v1/moderations",
            post(|Json(body): Json<Value>| async move {
                let flagged = body["input"] == "something awful";
                Json(json!({
                    "id": "modr-1",
                    "model": "omni-moderation-latest",
                    "results": [{ "flagged": flagged, "categories": {} }]
                }))
            }),
        );
        let api_url = spawn_upstream(router).await;
        let generator = generator(&api_url);

        assert!(generator
            .is_prompt_flagged("something awful", "sk-test")
            .await
            .unwrap());
        assert!(!generator
            .is_prompt_flagged("a quiet lake", "sk-test")
            .await
            .unwrap());
    }
}
