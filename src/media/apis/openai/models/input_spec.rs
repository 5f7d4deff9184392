use serde::Serialize;

use crate::media::{enums::media_model::MediaModel, models::dimensions::Dimensions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
}

impl InputSpec {
    pub fn new(model: &str, prompt: &str, size: &Dimensions) -> Self {
        Self {
            model: model.to_string(),
            prompt: prompt.to_string(),
            n: 1,
            size: size.to_string(),
            // gpt-image-1 always answers with base64 and rejects the field.
            response_format: MediaModel::accepts_response_format(model).then(|| "url".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dalle_asks_for_urls() {
        let spec = InputSpec::new("dall-e-2", "a cat", &Dimensions::square(512));
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "model": "dall-e-2",
                "prompt": "a cat",
                "n": 1,
                "size": "512x512",
                "response_format": "url"
            })
        );
    }

    #[test]
    fn gpt_image_omits_response_format() {
        let spec = InputSpec::new("gpt-image-1", "a cat", &Dimensions::square(1024));
        let json = serde_json::to_value(&spec).unwrap();

        assert!(json.get("response_format").is_none());
    }
}
