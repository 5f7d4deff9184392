use serde_json::{json, Value};

use crate::AppState;

use super::enums::api_status::ApiStatus;

pub fn get_api_state(state: &AppState) -> Value {
    let api_status = match state.api_key.resolve() {
        Some(_) => ApiStatus::Online,
        None => ApiStatus::Degraded,
    };

    return json!({
        "api_status": api_status.value(),
        "version": env!("CARGO_PKG_VERSION"),
    });
}
