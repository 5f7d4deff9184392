use uuid::Uuid;

use crate::app::util::time;

/// Identifies one pass through the endpoint; echoed in both envelope shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    pub request_id: String,
    pub generated_at: String,
}

impl RequestMeta {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            generated_at: time::now_rfc3339(),
        }
    }
}

impl Default for RequestMeta {
    fn default() -> Self {
        Self::new()
    }
}
