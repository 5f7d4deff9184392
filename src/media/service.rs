use validator::Validate;

use crate::{
    app::{
        enums::error_code::ErrorCode,
        models::{api_error::ApiError, json_from_request::JsonFromRequest, request_meta::RequestMeta},
        util::validation,
    },
    AppState,
};

use super::{
    apis::openai::models::input_spec::InputSpec,
    dtos::generate_media_dto::GenerateMediaDto,
    enums::media_model::MediaModel,
    errors::MediaApiError,
    models::{
        generate_media_response::GenerateMediaResponse, media_models_response::MediaModelsResponse,
    },
};

/// Credential first, then body, then validation: a missing key wins over a bad prompt.
pub async fn generate_media(
    payload: Result<JsonFromRequest<GenerateMediaDto>, ApiError>,
    meta: &RequestMeta,
    state: &AppState,
) -> Result<GenerateMediaResponse, ApiError> {
    let Some(api_key) = state.api_key.resolve() else {
        return Err(MediaApiError::MissingApiKey.value());
    };

    let JsonFromRequest(dto) = payload?;

    if let Err(e) = dto.validate() {
        return Err(ApiError::new(
            ErrorCode::InvalidInput,
            validation::first_message(&e),
        ));
    }

    let sanitized = dto.sanitized();
    let model = sanitized
        .model
        .as_deref()
        .unwrap_or(state.envy.default_model.as_str())
        .to_string();
    let size = MediaModel::resolve_size(&model, &state.envy.default_image_size);

    tracing::info!(
        request_id = %meta.request_id,
        %model,
        %size,
        prompt_chars = sanitized.prompt.chars().count(),
        "generating image"
    );

    if state.envy.moderation_enabled {
        if state
            .generator
            .is_prompt_flagged(&sanitized.prompt, &api_key)
            .await?
        {
            tracing::info!(request_id = %meta.request_id, "prompt flagged by moderation");
            return Err(MediaApiError::PromptFlagged.value());
        }
    }

    let input_spec = InputSpec::new(&model, &sanitized.prompt, &size);
    let image = state.generator.generate_image(&input_spec, &api_key).await?;

    if let Some(revised_prompt) = &image.revised_prompt {
        tracing::debug!(request_id = %meta.request_id, %revised_prompt);
    }

    Ok(GenerateMediaResponse::new(
        meta.clone(),
        image.url,
        size,
        &dto.prompt,
        &model,
    ))
}

pub fn get_media_models(state: &AppState) -> MediaModelsResponse {
    MediaModelsResponse::new(&state.envy.default_model, &state.envy.default_image_size)
}
