use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateMediaDto {
    #[serde(default)]
    #[validate(
        length(
            max = 1000,
            message = "prompt must be between 1 and 1000 characters."
        ),
        custom(function = "validate_not_blank")
    )]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64, message = "model must be between 1 and 64 characters."))]
    pub model: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("validate_not_blank");
        error.message = Some("prompt must be between 1 and 1000 characters.".into());
        return Err(error);
    }

    return Ok(());
}

impl GenerateMediaDto {
    /// The prompt as sent upstream: trimmed, line breaks folded into spaces.
    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: self
                .prompt
                .split(['\r', '\n'])
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            model: self
                .model
                .as_ref()
                .map(|model| model.trim().to_string())
                .filter(|model| !model.is_empty()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(prompt: &str) -> GenerateMediaDto {
        GenerateMediaDto {
            prompt: prompt.to_string(),
            model: None,
        }
    }

    #[test]
    fn accepts_prompts_within_bounds() {
        assert!(dto("A sunset over mountains").validate().is_ok());
        assert!(dto("x").validate().is_ok());
        assert!(dto(&"x".repeat(1000)).validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_prompts() {
        assert!(dto("").validate().is_err());
        assert!(dto("   \t\n").validate().is_err());
    }

    #[test]
    fn rejects_prompts_over_limit() {
        assert!(dto(&"x".repeat(1001)).validate().is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 1000 three-byte characters.
        assert!(dto(&"\u{6f22}".repeat(1000)).validate().is_ok());
    }

    #[test]
    fn validates_model_length() {
        let mut request = dto("a cat");
        request.model = Some("".to_string());
        assert!(request.validate().is_err());

        request.model = Some("dall-e-3".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn missing_prompt_deserializes_as_empty() {
        let request: GenerateMediaDto = serde_json::from_str("{}").unwrap();

        assert_eq!(request.prompt, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn sanitizes_prompt_and_model() {
        let request = GenerateMediaDto {
            prompt: "  a cat\r\non a mat ".to_string(),
            model: Some("  ".to_string()),
        };

        let sanitized = request.sanitized();

        assert_eq!(sanitized.prompt, "a cat on a mat");
        assert_eq!(sanitized.model, None);
    }

    #[test]
    fn strips_lone_carriage_returns() {
        for prompt in ["a cat\ron a mat", "a cat\r\ron a mat\r", "\ra cat on a mat"] {
            let sanitized = dto(prompt).sanitized();

            assert!(!sanitized.prompt.contains('\r'));
            assert_eq!(sanitized.prompt, "a cat on a mat");
        }
        assert_eq!(dto("a\rb").sanitized().prompt, "a b");
    }
}
