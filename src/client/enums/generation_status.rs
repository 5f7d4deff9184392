#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Pending,
    Generating,
    Completed,
    Error,
}

impl GenerationStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Pending => "pending",
            Self::Generating => "generating",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}
