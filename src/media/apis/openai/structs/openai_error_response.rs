use serde::Deserialize;

/// `{ "error": { "message", "type", "code", "param" } }`
#[derive(Debug, Deserialize)]
pub struct OpenAiErrorResponse {
    pub error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(rename(deserialize = "type"))]
    pub kind: Option<String>,
    pub code: Option<serde_json::Value>,
}

impl OpenAiErrorDetail {
    /// `code` is usually a string but has been seen as null or a number.
    pub fn code(&self) -> Option<&str> {
        self.code.as_ref().and_then(|code| code.as_str())
    }
}
