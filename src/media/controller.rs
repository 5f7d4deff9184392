use axum::{extract::State, Json};

use crate::{
    app::{
        errors::DefaultApiError,
        models::{api_error::ApiError, json_from_request::JsonFromRequest, request_meta::RequestMeta},
    },
    AppState,
};

use super::{
    dtos::generate_media_dto::GenerateMediaDto,
    models::{
        generate_media_response::GenerateMediaResponse, media_models_response::MediaModelsResponse,
    },
    service,
};

pub async fn generate_media(
    State(state): State<AppState>,
    payload: Result<JsonFromRequest<GenerateMediaDto>, ApiError>,
) -> Result<Json<GenerateMediaResponse>, ApiError> {
    let meta = RequestMeta::new();

    match service::generate_media(payload, &meta, &state).await {
        Ok(response) => {
            tracing::info!(request_id = %meta.request_id, model = %response.model, "image generated");
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!(
                request_id = %meta.request_id,
                error = ?e.error,
                message = %e.message,
                "image generation failed"
            );
            Err(e.with_meta(meta))
        }
    }
}

pub async fn method_not_allowed() -> ApiError {
    DefaultApiError::MethodNotAllowed.value()
}

pub async fn get_media_models(State(state): State<AppState>) -> Json<MediaModelsResponse> {
    Json(service::get_media_models(&state))
}
