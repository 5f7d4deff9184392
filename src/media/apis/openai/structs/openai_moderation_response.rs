use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OpenAiModerationResponse {
    pub results: Vec<OpenAiModerationResult>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiModerationResult {
    pub flagged: bool,
}

impl OpenAiModerationResponse {
    pub fn is_flagged(&self) -> bool {
        self.results.iter().any(|result| result.flagged)
    }
}
