use axum::{extract::State, Json};
use serde_json::Value;

use crate::AppState;

use super::service;

pub async fn get_root(State(state): State<AppState>) -> Json<Value> {
    Json(service::get_api_state(&state))
}
