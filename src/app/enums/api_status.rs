#[derive(Clone)]
pub enum ApiStatus {
    Online,
    Degraded,
}

impl ApiStatus {
    pub fn value(&self) -> String {
        match *self {
            Self::Online => "online".to_string(),
            Self::Degraded => "degraded".to_string(),
        }
    }
}
