use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{app, media, AppState};

use super::{errors::DefaultApiError, models::api_error::ApiError};

const BODY_LIMIT_BYTES: usize = 16 * 1024;

/// Must be called inside a tokio runtime: the buffer layer spawns its worker here.
pub fn build(state: AppState) -> Router {
    let cors = cors_layer(state.envy.frontend_url.as_deref());
    let rate_limit_per_sec = state.envy.rate_limit_per_sec.max(1);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/api/models", get(media::controller::get_media_models))
        .route(
            "/api/generate-image",
            post(media::controller::generate_media)
                .fallback(media::controller::method_not_allowed),
        )
        // layers, innermost first; cors stays outermost so preflights skip the rate limit
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(
                    rate_limit_per_sec,
                    Duration::from_secs(1),
                )),
        )
        .layer(cors)
        .with_state(state)
}

async fn handle_layer_error(err: BoxError) -> ApiError {
    tracing::error!(%err, "middleware error");
    DefaultApiError::InternalServerError.value()
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    match frontend_url.map(HeaderValue::from_str) {
        Some(Ok(origin)) => cors.allow_origin(origin),
        Some(Err(e)) => {
            tracing::warn!(%e, "FRONTEND_URL is not a valid origin, allowing any");
            cors.allow_origin(Any)
        }
        None => cors.allow_origin(Any),
    }
}
