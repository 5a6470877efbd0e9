use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(String),

    #[error("backend responded with HTTP {0}")]
    Status(u16),

    #[error("backend returned malformed JSON: {0}")]
    Decode(String),

    #[error("backend has no such resource")]
    NotFound,
}

impl BackendError {
    /// Short label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::Transport(_) => "transport",
            BackendError::Status(_) => "status",
            BackendError::Decode(_) => "decode",
            BackendError::NotFound => "not_found",
        }
    }
}
