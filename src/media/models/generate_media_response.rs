use serde::{Deserialize, Serialize};

use crate::app::models::request_meta::RequestMeta;

use super::dimensions::Dimensions;

/// Success shape of the generate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMediaResponse {
    pub success: bool,
    pub image_url: String,
    pub request_id: String,
    pub generated_at: String,
    pub dimensions: Dimensions,
    pub prompt: String,
    pub model: String,
}

impl GenerateMediaResponse {
    pub fn new(
        meta: RequestMeta,
        image_url: String,
        dimensions: Dimensions,
        prompt: &str,
        model: &str,
    ) -> Self {
        Self {
            success: true,
            image_url,
            request_id: meta.request_id,
            generated_at: meta.generated_at,
            dimensions,
            prompt: prompt.to_string(),
            model: model.to_string(),
        }
    }
}
