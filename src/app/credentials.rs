pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Where the image API key comes from. The environment variant is read on
/// every call so a rotated or newly exported key applies without a restart.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    Environment(String),
    Fixed(Option<String>),
}

impl ApiKeySource {
    pub fn from_env() -> Self {
        Self::Environment(OPENAI_API_KEY.to_string())
    }

    /// Unset, empty and whitespace-only keys all count as absent.
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            Self::Environment(var) => std::env::var(var).ok(),
            Self::Fixed(key) => key.clone(),
        };

        key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
    }
}
