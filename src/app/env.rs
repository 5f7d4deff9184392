use serde::Deserialize;

use crate::media::models::dimensions::Dimensions;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub frontend_url: Option<String>,
    pub port: Option<u16>,

    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_image_size")]
    pub default_image_size: Dimensions,
    #[serde(default)]
    pub moderation_enabled: bool,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_rate_limit_per_sec")]
    pub rate_limit_per_sec: u64,
}

impl Envy {
    /// Reads `.env.{APP_ENV}` (if present) and then the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());
        let _ = dotenvy::from_filename(format!(".env.{}", app_env));

        envy::from_env::<Envy>()
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "dall-e-2".to_string()
}

fn default_image_size() -> Dimensions {
    Dimensions {
        width: 512,
        height: 512,
    }
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_rate_limit_per_sec() -> u64 {
    5
}

#[cfg(test)]
pub fn test_envy(vars: &[(&str, &str)]) -> Envy {
    envy::from_iter(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>(),
    )
    .expect("test envy")
}
