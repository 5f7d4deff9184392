use serde::{Deserialize, Serialize};

use crate::media::enums::media_model::MediaModel;

use super::dimensions::Dimensions;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaModelsResponse {
    pub models: Vec<MediaModelInfo>,
    pub default_model: String,
    pub default_size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaModelInfo {
    pub id: String,
    pub sizes: Vec<String>,
}

impl MediaModelsResponse {
    pub fn new(default_model: &str, default_size: &Dimensions) -> Self {
        let models = MediaModel::ALL
            .iter()
            .map(|id| MediaModelInfo {
                id: id.to_string(),
                sizes: MediaModel::supported_sizes(id)
                    .unwrap_or_default()
                    .iter()
                    .map(|size| size.to_string())
                    .collect(),
            })
            .collect();

        Self {
            models,
            default_model: default_model.to_string(),
            default_size: MediaModel::resolve_size(default_model, default_size).to_string(),
        }
    }
}
