use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OpenAiImagesResponse {
    #[serde(default)]
    pub data: Vec<OpenAiImageData>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    pub revised_prompt: Option<String>,
}
