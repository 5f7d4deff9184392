use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::{
    app::{credentials::ApiKeySource, env::test_envy},
    media::apis::{openai::models::input_spec::InputSpec, GeneratedImage, ImageGenerator, ProviderError},
    AppState,
};

pub const FAKE_IMAGE_URL: &str = "https://images.example/generated.png";

/// In-memory stand-in for the image API that records what it was asked for.
#[derive(Clone)]
pub struct FakeGenerator {
    outcome: Result<GeneratedImage, ProviderError>,
    flagged_word: Option<String>,
    calls: Arc<Mutex<Vec<InputSpec>>>,
}

impl FakeGenerator {
    pub fn ok() -> Self {
        Self {
            outcome: Ok(GeneratedImage {
                url: FAKE_IMAGE_URL.to_string(),
                revised_prompt: None,
            }),
            flagged_word: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            ..Self::ok()
        }
    }

    pub fn flagging(mut self, word: &str) -> Self {
        self.flagged_word = Some(word.to_string());
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<InputSpec>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate_image(
        &self,
        input_spec: &InputSpec,
        _api_key: &str,
    ) -> Result<GeneratedImage, ProviderError> {
        self.calls.lock().unwrap().push(input_spec.clone());
        self.outcome.clone()
    }

    async fn is_prompt_flagged(&self, prompt: &str, _api_key: &str) -> Result<bool, ProviderError> {
        Ok(self
            .flagged_word
            .as_deref()
            .is_some_and(|word| prompt.contains(word)))
    }
}

pub fn state(api_key: Option<&str>, generator: FakeGenerator) -> AppState {
    state_with(&[], api_key, generator)
}

pub fn state_with(
    vars: &[(&str, &str)],
    api_key: Option<&str>,
    generator: FakeGenerator,
) -> AppState {
    AppState {
        envy: Arc::new(test_envy(vars)),
        api_key: Arc::new(ApiKeySource::Fixed(api_key.map(str::to_string))),
        generator: Arc::new(generator),
    }
}

pub async fn json_body(res: Response) -> Value {
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sorted top-level keys of a JSON object.
pub fn keys(json: &Value) -> Vec<String> {
    let mut keys: Vec<String> = json
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}
